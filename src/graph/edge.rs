//! Edge representation in the knowledge graph

use crate::catalog::PublicationId;
use serde::{Deserialize, Serialize};

/// Relationship label carried by an edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Declared in the source publication's related experiments
    #[default]
    Related,
}

/// A directed edge between two publications
///
/// The target may name a publication that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: PublicationId,
    pub target: PublicationId,
    pub relationship: Relationship,
}

impl Edge {
    /// Create a new "related" edge
    pub fn related(source: PublicationId, target: PublicationId) -> Self {
        Self {
            source,
            target,
            relationship: Relationship::Related,
        }
    }
}
