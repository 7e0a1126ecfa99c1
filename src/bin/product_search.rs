use anyhow::{Context, Result};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use product_grid::config::{Config, ProviderKind};
use product_grid::presenter::{
    ApiResultsProvider, MockResultsProvider, Presenter, ResultsProvider, TerminalView, UiEvent,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("product_grid=warn".parse()?),
        )
        .init();

    let config = Config::load()?;

    let provider: Box<dyn ResultsProvider> = match config.presenter.provider {
        ProviderKind::Network => {
            info!("Using search API at {}", config.presenter.endpoint_url);
            let client = reqwest::Client::builder()
                .build()
                .context("Failed to build HTTP client")?;
            Box::new(ApiResultsProvider::new(
                client,
                config.presenter.endpoint_url.clone(),
            ))
        }
        ProviderKind::Mock => {
            info!("Using mock results");
            Box::new(MockResultsProvider::new(Duration::from_millis(
                config.presenter.mock_delay_ms,
            )))
        }
    };

    let mut presenter = Presenter::new(provider, TerminalView::new(io::stdout()));

    println!("Type a search term and press Enter (Ctrl-D to quit).");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        presenter
            .handle_event(UiEvent::KeyPress("Enter".to_string()), &line)
            .await;
    }

    Ok(())
}
