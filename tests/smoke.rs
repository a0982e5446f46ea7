//! Integration smoke tests for `quran_range`

use quran_range::core::SurahCatalog;
use quran_range::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn standard_catalog_is_complete() {
    let catalog = SurahCatalog::standard();
    assert_eq!(catalog.len(), 114);
    assert_eq!(catalog.total_verses(), 6236);
}
