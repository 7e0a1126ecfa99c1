use anyhow::{Context, Result};
use tracing::info;

use product_grid::config::Config;
use product_grid::scrapers::searcher_for;
use product_grid::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("product_grid=info".parse()?),
        )
        .init();

    info!("Starting Product Grid search API");

    let config = Config::load()?;

    let searcher = searcher_for(&config.source).context("Failed to build HTTP client")?;
    info!(
        "Serving {} results from {}",
        searcher.source().display_name(),
        config.source.base_url
    );

    server::start(&config.server.bind_addr, searcher).await
}
