//! Transport-independent API layer.
//!
//! `PublicationApi` is the single entry point for all consumer-facing
//! operations. Transports (the HTTP server, the CLI) call `PublicationApi`
//! methods and never reach into the catalog or query modules directly.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError, CatalogResult, Publication, PublicationId};
use crate::graph::KnowledgeGraph;
use crate::insight::{InsightExtractor, Insights};
use crate::query::{self, PublicationQuery, Summary};

/// Single entry point for all consumer-facing operations.
///
/// Cheap to clone; every clone shares the same immutable catalog and graph.
#[derive(Debug, Clone)]
pub struct PublicationApi {
    catalog: Arc<Catalog>,
    graph: Arc<KnowledgeGraph>,
    extractor: InsightExtractor,
}

impl PublicationApi {
    /// Create a new API instance, projecting the knowledge graph once.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_extractor(catalog, InsightExtractor::default())
    }

    /// Create a new API instance with a custom insight extractor.
    pub fn with_extractor(catalog: Arc<Catalog>, extractor: InsightExtractor) -> Self {
        let graph = KnowledgeGraph::build(&catalog);
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "projected knowledge graph"
        );
        Self {
            catalog,
            graph: Arc::new(graph),
            extractor,
        }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parse a raw identifier; anything that is not an integer is reported as not found.
    pub fn resolve_id(&self, raw: &str) -> CatalogResult<PublicationId> {
        raw.parse::<PublicationId>()
            .map_err(|_| CatalogError::NotFound(raw.to_string()))
    }

    // --- Read ---

    /// Publications matching `query`, in catalog order.
    pub fn publications(&self, query: &PublicationQuery) -> Vec<&Publication> {
        query.execute(&self.catalog)
    }

    /// A single publication by id.
    pub fn publication(&self, id: PublicationId) -> CatalogResult<&Publication> {
        self.catalog
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Publications listed as related to `id`, in listed order.
    pub fn related(&self, id: PublicationId) -> CatalogResult<Vec<&Publication>> {
        query::related(&self.catalog, id)
    }

    /// Catalog-wide aggregate.
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.catalog)
    }

    /// The knowledge graph projected at construction.
    pub fn knowledge_graph(&self) -> &KnowledgeGraph {
        &self.graph
    }

    /// Heuristic insights for one publication.
    pub fn insights(&self, id: PublicationId) -> CatalogResult<Insights> {
        let publication = self.publication(id)?;
        Ok(self.extractor.extract(publication))
    }
}
