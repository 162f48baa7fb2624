//! Application wiring: configuration, catalog load, state, HTTP server.

use crate::catalog::Catalog;
use crate::cli::Args;
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info};

pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    /// Loads the catalog snapshot and builds the shared state. A missing or
    /// unparseable snapshot is fatal here; everything after startup assumes
    /// a valid in-memory catalog.
    pub fn new(args: &Args, mut config: Config) -> Result<Self> {
        if let Some(port) = args.port {
            config.port = port;
        }
        if let Some(path) = &args.catalog {
            config.catalog_path = path.display().to_string();
        }

        let catalog_path = PathBuf::from(&config.catalog_path);
        let catalog = Catalog::load(&catalog_path).context("failed to load catalog snapshot")?;
        info!(
            courses = catalog.course_count(),
            path = %config.catalog_path,
            "catalog loaded"
        );

        let state = AppState::new(catalog, catalog_path);
        Ok(Self { config, state })
    }

    pub async fn run(self) -> Result<()> {
        let router = web::create_router(self.state);
        let addr = format!("0.0.0.0:{}", self.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!(%addr, "listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")
    }
}

async fn shutdown_signal() {
    if let Err(source) = tokio::signal::ctrl_c().await {
        error!(error = ?source, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
