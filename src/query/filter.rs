//! Filter queries over the catalog

use crate::catalog::{Catalog, Publication};

/// Raw filter parameters as they arrive from a transport (query string, CLI flags)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    pub search: Option<String>,
    pub year: Option<String>,
    pub mission: Option<String>,
    pub risk: Option<String>,
}

impl FilterParams {
    /// Collect parameters from decoded key/value pairs.
    ///
    /// The first occurrence of a repeated key wins and unknown keys are
    /// ignored, so no query string can make a listing fail.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "search" => &mut params.search,
                "year" => &mut params.year,
                "mission" => &mut params.mission,
                "risk" => &mut params.risk,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// Year predicate after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    /// Match publications from exactly this year
    Exact(i32),
    /// The raw value was not a canonical integer; matches nothing
    Unmatchable,
}

impl YearFilter {
    /// Normalize a raw year parameter.
    ///
    /// Only the canonical decimal form of an integer is accepted, so `"2023"`
    /// matches 2023 but `"02023"` and `"2023.0"` match nothing.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i32>() {
            Ok(year) if year.to_string() == raw => YearFilter::Exact(year),
            _ => YearFilter::Unmatchable,
        }
    }

    fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::Exact(expected) => *expected == year,
            YearFilter::Unmatchable => false,
        }
    }
}

/// Query for listing publications by conjunctive criteria
///
/// Every criterion is optional; an empty query matches the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationQuery {
    /// Lowercased case-insensitive substring over title, keywords and full text
    pub search: Option<String>,
    pub year: Option<YearFilter>,
    /// Exact entry of `mission_relevance`
    pub mission: Option<String>,
    /// Exact, case-sensitive risk level
    pub risk: Option<String>,
}

impl PublicationQuery {
    /// Create a new empty query (matches all publications)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw parameters; empty strings count as absent
    pub fn from_params(params: &FilterParams) -> Self {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        let mut query = Self::new();
        if let Some(search) = present(&params.search) {
            query = query.with_search(search);
        }
        if let Some(year) = present(&params.year) {
            query.year = Some(YearFilter::parse(year));
        }
        if let Some(mission) = present(&params.mission) {
            query = query.with_mission(mission);
        }
        if let Some(risk) = present(&params.risk) {
            query = query.with_risk(risk);
        }
        query
    }

    /// Filter by case-insensitive text search
    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        self.search = Some(search.as_ref().to_lowercase());
        self
    }

    /// Filter by publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(YearFilter::Exact(year));
        self
    }

    /// Filter by mission relevance
    pub fn with_mission(mut self, mission: impl Into<String>) -> Self {
        self.mission = Some(mission.into());
        self
    }

    /// Filter by risk level
    pub fn with_risk(mut self, risk: impl Into<String>) -> Self {
        self.risk = Some(risk.into());
        self
    }

    /// Execute the query, preserving catalog order
    pub fn execute<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Publication> {
        catalog
            .publications()
            .iter()
            .filter(|publication| self.matches(publication))
            .collect()
    }

    /// Check if a publication matches all query criteria
    pub fn matches(&self, publication: &Publication) -> bool {
        if let Some(ref needle) = self.search {
            let hit = publication.title.to_lowercase().contains(needle.as_str())
                || publication
                    .keywords
                    .iter()
                    .any(|k| k.to_lowercase().contains(needle.as_str()))
                || publication.full_text.to_lowercase().contains(needle.as_str());
            if !hit {
                return false;
            }
        }

        if let Some(year) = self.year {
            if !year.matches(publication.year) {
                return false;
            }
        }

        if let Some(ref mission) = self.mission {
            if !publication.is_relevant_to(mission) {
                return false;
            }
        }

        if let Some(ref risk) = self.risk {
            if &publication.risk_level != risk {
                return false;
            }
        }

        true
    }
}
