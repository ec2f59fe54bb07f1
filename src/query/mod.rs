//! Query system for the publication catalog
//!
//! Provides conjunctive filtering, related-publication lookup and the
//! catalog-wide summary aggregate.

mod filter;
mod related;
mod summary;

pub use filter::{FilterParams, PublicationQuery, YearFilter};
pub use related::related;
pub use summary::{MissionRelevance, RiskDistribution, Summary, TOP_KEYWORD_COUNT};
