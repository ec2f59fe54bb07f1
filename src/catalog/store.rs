//! Catalog: the immutable, ordered collection of publications

use super::publication::{Publication, PublicationId};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Built-in sample collection, embedded at compile time
const SAMPLE_DATA: &str = include_str!("../../data/publications.json");

/// Errors that can occur in catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No publication matches the requested id (raw text as received)
    #[error("Publication not found: {0}")]
    NotFound(String),

    #[error("Duplicate publication id: {0}")]
    DuplicateId(PublicationId),

    #[error("Unsupported data format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The publication collection
///
/// Built once, never mutated. Preserves authored order; ids are unique.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    publications: Vec<Publication>,
    /// Position of each publication in `publications`
    index: HashMap<PublicationId, usize>,
}

impl Catalog {
    /// Build a catalog from publications in their authored order
    ///
    /// Fails if two publications share an id.
    pub fn new(publications: Vec<Publication>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(publications.len());
        for (position, publication) in publications.iter().enumerate() {
            if index.insert(publication.id, position).is_some() {
                return Err(CatalogError::DuplicateId(publication.id));
            }
        }
        Ok(Self {
            publications,
            index,
        })
    }

    /// The built-in six-record sample collection
    pub fn sample() -> CatalogResult<Self> {
        Self::from_json(SAMPLE_DATA)
    }

    /// Parse a JSON array of publications
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        let publications: Vec<Publication> = serde_json::from_str(text)?;
        Self::new(publications)
    }

    /// Parse a YAML sequence of publications
    pub fn from_yaml(text: &str) -> CatalogResult<Self> {
        let publications: Vec<Publication> = serde_yaml::from_str(text)?;
        Self::new(publications)
    }

    /// Load a data file, choosing the format by extension (`json`, `yaml`, `yml`)
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json(&std::fs::read_to_string(path)?)?,
            "yaml" | "yml" => Self::from_yaml(&std::fs::read_to_string(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::info!(
            path = %path.display(),
            publications = catalog.len(),
            "loaded publication catalog"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the built-in sample
    pub fn load_or_sample(path: Option<&Path>) -> CatalogResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let catalog = Self::sample()?;
                tracing::info!(publications = catalog.len(), "loaded built-in sample catalog");
                Ok(catalog)
            }
        }
    }

    /// All publications in authored order
    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Get a publication by id
    pub fn get(&self, id: PublicationId) -> Option<&Publication> {
        self.index.get(&id).map(|&position| &self.publications[position])
    }

    /// Check if a publication exists
    pub fn contains(&self, id: PublicationId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of publications
    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }
}
