//! Shared fixture loading for integration tests.

use std::path::PathBuf;
use worklist::catalog::Catalog;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/coursedb.json")
}

#[allow(dead_code)]
pub fn fixture_catalog() -> Catalog {
    Catalog::load(&fixture_path()).expect("fixture snapshot loads")
}
