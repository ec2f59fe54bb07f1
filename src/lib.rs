//! spacebio: Space Bioscience Publication Catalog
//!
//! An immutable, in-memory catalog of publication records with filtering,
//! aggregate summaries, a derived knowledge graph of related work and a
//! heuristic text-insight extractor, served over a small JSON REST API.
//!
//! # Core Concepts
//!
//! - **Catalog**: the ordered publication collection, loaded once and never mutated
//! - **Queries**: conjunctive filters, related lookups and the summary aggregate
//! - **Knowledge graph**: node/edge projection of declared relations
//! - **Insights**: leading sentences and distinct long terms of a publication's text
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use spacebio::{Catalog, PublicationApi, PublicationQuery};
//!
//! let catalog = Catalog::sample().unwrap();
//! let api = PublicationApi::new(Arc::new(catalog));
//! let high_risk = api.publications(&PublicationQuery::new().with_risk("High"));
//! assert_eq!(high_risk.len(), 3);
//! ```

pub mod api;
pub mod catalog;
pub mod graph;
pub mod insight;
pub mod query;
pub mod server;

pub use api::PublicationApi;
pub use catalog::{Catalog, CatalogError, CatalogResult, Publication, PublicationId};
pub use graph::{Edge, KnowledgeGraph, Node, Relationship};
pub use insight::{DefaultTokenizer, InsightExtractor, Insights, Tokenizer};
pub use query::{FilterParams, PublicationQuery, Summary};
pub use server::{ServerConfig, ServerError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
