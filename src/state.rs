//! Application state shared across handlers: the catalog handle and the
//! autocompleter built from it.

use crate::autocomplete::AutoCompleter;
use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Cheap to clone; all fields are shared. The catalog is read-only between
/// reloads, so concurrent request handling takes read locks only.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
    pub autocompleter: Arc<RwLock<AutoCompleter>>,
    catalog_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Catalog, catalog_path: PathBuf) -> Self {
        let autocompleter = AutoCompleter::new(catalog.course_names());
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            autocompleter: Arc::new(RwLock::new(autocompleter)),
            catalog_path: Arc::new(catalog_path),
        }
    }

    /// Replaces the catalog and autocompleter wholesale from the snapshot on
    /// disk. Returns the new course count.
    pub async fn reload_catalog(&self) -> Result<usize> {
        let fresh =
            Catalog::load(&self.catalog_path).context("failed to reload catalog snapshot")?;
        let courses = fresh.course_count();
        let completer = AutoCompleter::new(fresh.course_names());

        *self.catalog.write().await = fresh;
        *self.autocompleter.write().await = completer;
        info!(courses, "catalog reloaded");
        Ok(courses)
    }
}
