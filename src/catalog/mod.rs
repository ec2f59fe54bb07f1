//! Publication records and the immutable catalog that holds them

mod publication;
mod store;

pub use publication::{Publication, PublicationId};
pub use store::{Catalog, CatalogError, CatalogResult};
