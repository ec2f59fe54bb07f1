//! Aggregate statistics over the whole catalog

use crate::catalog::Catalog;
use serde::Serialize;
use std::collections::HashMap;

/// Number of keywords reported in `top_keywords`
pub const TOP_KEYWORD_COUNT: usize = 8;

/// Publication counts per fixed risk category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    #[serde(rename = "High")]
    pub high: usize,
    #[serde(rename = "Medium")]
    pub medium: usize,
    #[serde(rename = "Low")]
    pub low: usize,
}

/// Publication counts per tracked mission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MissionRelevance {
    #[serde(rename = "Mars")]
    pub mars: usize,
    #[serde(rename = "Moon")]
    pub moon: usize,
    #[serde(rename = "ISS")]
    pub iss: usize,
}

/// Catalog-wide aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_publications: usize,
    /// Distinct years, in first-occurrence order
    pub years: Vec<i32>,
    /// Most frequent keywords, ties kept in first-encountered order
    pub top_keywords: Vec<String>,
    pub risk_distribution: RiskDistribution,
    pub mission_relevance: MissionRelevance,
}

impl Summary {
    /// Compute the aggregate for a catalog
    pub fn compute(catalog: &Catalog) -> Self {
        let publications = catalog.publications();

        let mut years = Vec::new();
        for publication in publications {
            if !years.contains(&publication.year) {
                years.push(publication.year);
            }
        }

        let mut risk_distribution = RiskDistribution::default();
        let mut mission_relevance = MissionRelevance::default();
        for publication in publications {
            match publication.risk_level.as_str() {
                "High" => risk_distribution.high += 1,
                "Medium" => risk_distribution.medium += 1,
                "Low" => risk_distribution.low += 1,
                _ => {}
            }
            if publication.is_relevant_to("Mars") {
                mission_relevance.mars += 1;
            }
            if publication.is_relevant_to("Moon") {
                mission_relevance.moon += 1;
            }
            if publication.is_relevant_to("ISS") {
                mission_relevance.iss += 1;
            }
        }

        let keywords = publications.iter().flat_map(|p| p.keywords.iter());

        Self {
            total_publications: publications.len(),
            years,
            top_keywords: top_keywords(keywords, TOP_KEYWORD_COUNT),
            risk_distribution,
            mission_relevance,
        }
    }
}

/// Rank keywords by occurrence count, descending.
///
/// The sort is stable over first-encountered order, which breaks ties.
fn top_keywords<'a>(keywords: impl Iterator<Item = &'a String>, limit: usize) -> Vec<String> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for keyword in keywords {
        let keyword: &'a str = keyword.as_str();
        let position = *positions.entry(keyword).or_insert_with(|| {
            counts.push((keyword, 0));
            counts.len() - 1
        });
        counts[position].1 += 1;
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(keyword, _)| keyword.to_string())
        .collect()
}
