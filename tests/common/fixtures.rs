//! Fixture catalogs and data files

use spacebio::{Catalog, Publication, PublicationApi};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// API over the built-in six-record sample
pub fn sample_api() -> PublicationApi {
    PublicationApi::new(Arc::new(
        Catalog::sample().expect("built-in sample must load"),
    ))
}

/// A small catalog exercising dangling relations, odd categories and
/// shared keywords
pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        Publication::new(10, "Lunar Regolith Toxicity")
            .with_year(2021)
            .with_full_text("Regolith dust irritates airways. Filtration helps. Masks help too.")
            .with_keywords(["regolith", "dust", "toxicity"])
            .with_missions(["Moon"])
            .with_related([11, 404])
            .with_experiment_type("Toxicology")
            .with_risk_level("Low")
            .with_countermeasures(["Filtration"]),
        Publication::new(11, "Dust Mitigation on Habitat Seals")
            .with_year(2024)
            .with_full_text("Seals degrade under abrasive dust exposure")
            .with_keywords(["dust", "habitat"])
            .with_missions(["Moon", "Mars"])
            .with_related([10])
            .with_experiment_type("Engineering")
            .with_risk_level("Critical"),
        Publication::new(12, "Europa Analog Microbes")
            .with_year(2021)
            .with_keywords(["dust", "microbes", "habitat"])
            .with_missions(["Europa"])
            .with_experiment_type("Astrobiology")
            .with_risk_level("low"),
    ])
    .expect("fixture ids are unique")
}

/// Write publications as a data file in `dir` and return its path
pub fn write_data_file(dir: &Path, name: &str, publications: &[Publication]) -> PathBuf {
    let path = dir.join(name);
    let text = if name.ends_with(".json") {
        serde_json::to_string_pretty(publications).expect("serialize json")
    } else {
        serde_yaml::to_string(publications).expect("serialize yaml")
    };
    std::fs::write(&path, text).expect("write data file");
    path
}
