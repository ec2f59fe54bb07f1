//! Knowledge graph projection over the catalog

mod edge;
mod knowledge;
mod node;


pub use edge::{Edge, Relationship};
pub use knowledge::KnowledgeGraph;
pub use node::Node;
