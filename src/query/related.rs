//! Related-publication lookup

use crate::catalog::{Catalog, CatalogError, CatalogResult, Publication, PublicationId};

/// Publications listed in `id`'s `related_experiments`, in listed order.
///
/// References to ids absent from the catalog are skipped. An id listed twice
/// appears once, at its first position.
pub fn related(catalog: &Catalog, id: PublicationId) -> CatalogResult<Vec<&Publication>> {
    let source = catalog
        .get(id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

    let mut result: Vec<&Publication> = Vec::with_capacity(source.related_experiments.len());
    for related_id in &source.related_experiments {
        match catalog.get(*related_id) {
            Some(publication) if !result.iter().any(|p| p.id == publication.id) => {
                result.push(publication)
            }
            Some(_) => {}
            None => tracing::debug!(source = %id, target = %related_id, "skipping dangling relation"),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &[&Publication]) -> Vec<i64> {
        result.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_related_in_sample() {
        let catalog = Catalog::sample().unwrap();
        let result = related(&catalog, PublicationId::new(1)).unwrap();
        assert_eq!(ids(&result), vec![2, 4]);

        let result = related(&catalog, PublicationId::new(6)).unwrap();
        assert_eq!(ids(&result), vec![3, 5]);
    }

    #[test]
    fn test_related_follows_listed_order() {
        let catalog = Catalog::new(vec![
            Publication::new(1, "a").with_related([3, 2]),
            Publication::new(2, "b"),
            Publication::new(3, "c"),
        ])
        .unwrap();
        let result = related(&catalog, PublicationId::new(1)).unwrap();
        assert_eq!(ids(&result), vec![3, 2]);
    }

    #[test]
    fn test_related_skips_dangling_and_repeats() {
        let catalog = Catalog::new(vec![
            Publication::new(1, "a").with_related([42, 2, 7, 2]),
            Publication::new(2, "b"),
        ])
        .unwrap();
        let result = related(&catalog, PublicationId::new(1)).unwrap();
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_related_unknown_source() {
        let catalog = Catalog::sample().unwrap();
        let result = related(&catalog, PublicationId::new(99));
        assert!(matches!(result, Err(CatalogError::NotFound(ref id)) if id == "99"));
    }

    #[test]
    fn test_related_with_no_relations() {
        let catalog = Catalog::new(vec![Publication::new(1, "alone")]).unwrap();
        assert!(related(&catalog, PublicationId::new(1)).unwrap().is_empty());
    }
}
