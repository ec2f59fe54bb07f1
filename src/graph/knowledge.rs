//! KnowledgeGraph: read-only node/edge view of the catalog

use super::edge::Edge;
use super::node::Node;
use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Nodes and edges derived from publications and their declared relations
///
/// Holds no state of its own; rebuilding from the same catalog yields an
/// equal graph. Edges are directional as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    /// One node per publication, in catalog order
    pub nodes: Vec<Node>,
    /// One edge per related-experiment entry, grouped by source in catalog order
    pub edges: Vec<Edge>,
}

impl KnowledgeGraph {
    /// Project a catalog into a graph
    pub fn build(catalog: &Catalog) -> Self {
        let publications = catalog.publications();
        let nodes = publications.iter().map(Node::from).collect();
        let edges = publications
            .iter()
            .flat_map(|publication| {
                publication
                    .related_experiments
                    .iter()
                    .map(move |target| Edge::related(publication.id, *target))
            })
            .collect();

        Self { nodes, edges }
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
