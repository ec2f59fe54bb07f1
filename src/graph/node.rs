//! Node representation in the knowledge graph

use crate::catalog::{Publication, PublicationId};
use serde::{Deserialize, Serialize};

/// A node in the knowledge graph: one per publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: PublicationId,
    pub title: String,
    /// Experiment category of the publication
    #[serde(rename = "type")]
    pub node_type: String,
    /// Risk level of the publication
    pub risk: String,
}

impl From<&Publication> for Node {
    fn from(publication: &Publication) -> Self {
        Self {
            id: publication.id,
            title: publication.title.clone(),
            node_type: publication.experiment_type.clone(),
            risk: publication.risk_level.clone(),
        }
    }
}
