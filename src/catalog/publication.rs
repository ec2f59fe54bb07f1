//! Publication record representation

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a publication
///
/// Serializes as a plain integer, matching the authored data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationId(i64);

impl PublicationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PublicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PublicationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Strict decimal parse: `"12abc"`, `""` and `" 3"` are all rejected.
impl FromStr for PublicationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A single publication entry in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: PublicationId,
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    /// One-paragraph abstract
    pub summary: String,
    /// Multi-sentence body used for insight extraction
    pub full_text: String,
    pub keywords: Vec<String>,
    /// Free-text severity/impact label
    pub impact: String,
    /// Missions this work bears on (e.g. "Mars", "ISS"), in authored order
    pub mission_relevance: Vec<String>,
    /// Ids of related publications; may reference ids absent from the catalog
    pub related_experiments: Vec<PublicationId>,
    pub experiment_type: String,
    /// "Low", "Medium" or "High" by convention; not enforced
    pub risk_level: String,
    pub countermeasures: Vec<String>,
}

impl Publication {
    /// Create a publication with the given id and title and every other field empty
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: PublicationId::new(id),
            title: title.into(),
            authors: Vec::new(),
            year: 0,
            summary: String::new(),
            full_text: String::new(),
            keywords: Vec::new(),
            impact: String::new(),
            mission_relevance: Vec::new(),
            related_experiments: Vec::new(),
            experiment_type: String::new(),
            risk_level: String::new(),
            countermeasures: Vec::new(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_full_text(mut self, text: impl Into<String>) -> Self {
        self.full_text = text.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_missions<I, S>(mut self, missions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mission_relevance = missions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_related<I>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.related_experiments = related.into_iter().map(PublicationId::new).collect();
        self
    }

    pub fn with_experiment_type(mut self, experiment_type: impl Into<String>) -> Self {
        self.experiment_type = experiment_type.into();
        self
    }

    pub fn with_risk_level(mut self, risk_level: impl Into<String>) -> Self {
        self.risk_level = risk_level.into();
        self
    }

    pub fn with_countermeasures<I, S>(mut self, countermeasures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countermeasures = countermeasures.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether this publication lists the given mission
    pub fn is_relevant_to(&self, mission: &str) -> bool {
        self.mission_relevance.iter().any(|m| m == mission)
    }
}
