use std::fs;
use std::path::PathBuf;

use bell_standards::{
    CatalogSource, DEFAULT_STANDARDS, FallbackReason, NO_DESCRIPTION, NONE_DESCRIPTION,
    StandardsCatalog, default_standards_file,
};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "bellringers-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_document_yields_default_set_unchanged() {
    let path = unique_temp_dir("missing").join("Intro_CS.md");
    let catalog = StandardsCatalog::load(&path);

    assert_eq!(
        catalog.source(),
        &CatalogSource::Defaults {
            reason: FallbackReason::DocumentUnavailable
        }
    );
    assert_eq!(catalog.len(), DEFAULT_STANDARDS.len() + 1);
    for &(code, description) in DEFAULT_STANDARDS {
        assert_eq!(catalog.description_for(code), description);
    }
    assert_eq!(catalog.description_for("None"), NONE_DESCRIPTION);
    assert_eq!(catalog.entries(), StandardsCatalog::defaults().entries());
}

#[test]
fn document_on_disk_replaces_defaults() {
    let path = unique_temp_dir("doc").join("standards.md");
    fs::write(
        &path,
        "## Domain 2 - Algorithms and Programming\n\
         ### Standard 2.3 - Develop and debug programs\n\
         * **2.3.7** Debug errors to ensure functionality\n",
    )
    .unwrap();

    let catalog = StandardsCatalog::load(&path);
    assert_eq!(
        catalog.source(),
        &CatalogSource::Document {
            path: Some(path.clone())
        }
    );
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.description_for("2.3.7"),
        "Debug errors to ensure functionality"
    );
    assert_eq!(catalog.description_for("1A-AP-08"), NO_DESCRIPTION);
}

#[test]
fn document_without_indicators_falls_back() {
    let path = unique_temp_dir("empty").join("standards.md");
    fs::write(&path, "## Domain 1 - Computing Systems\n### Standard 1.1 - Devices\n").unwrap();

    let catalog = StandardsCatalog::load(&path);
    assert_eq!(
        catalog.source(),
        &CatalogSource::Defaults {
            reason: FallbackReason::NoIndicators
        }
    );
    assert_eq!(catalog.len(), DEFAULT_STANDARDS.len() + 1);
}

#[test]
fn each_load_rereads_the_document() {
    let path = unique_temp_dir("reload").join("standards.md");
    fs::write(&path, "Domain 1 - A\nStandard 1.1 - B\n* **1.1.1** Before\n").unwrap();
    assert_eq!(StandardsCatalog::load(&path).description_for("1.1.1"), "Before");

    fs::write(&path, "Domain 1 - A\nStandard 1.1 - B\n* **1.1.1** After\n").unwrap();
    assert_eq!(StandardsCatalog::load(&path).description_for("1.1.1"), "After");
}

#[test]
fn bundled_document_catalog_order() {
    let catalog = StandardsCatalog::load(&default_standards_file());
    let codes: Vec<&str> = catalog.ordered_catalog().iter().map(|e| e.code).collect();
    assert_eq!(codes.first(), Some(&"None"));
    let position = |code: &str| codes.iter().position(|c| *c == code).unwrap();
    assert!(position("4.3.2") < position("4.10.1"));
    assert!(position("1.2.1") < position("2.1.1"));
    assert_eq!(codes.len(), 21);
}
