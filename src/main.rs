use anyhow::Context;
use clap::Parser;
use tracing::info;

use worklist::app::App;
use worklist::cli::Args;
use worklist::config::Config;
use worklist::logging::setup_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load config and set up logging before App::new() so startup logs are
    // never silently dropped.
    let config = Config::load().context("failed to load config")?;
    setup_logging(&config, args.tracing);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        },
        "starting worklist"
    );

    let app = App::new(&args, config)?;
    app.run().await
}
