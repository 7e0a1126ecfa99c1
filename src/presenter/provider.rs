use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::models::{ProductId, ProductRecord, MAX_RESULTS, PLACEHOLDER_URL};
use crate::parsers::{encode_uri_component, format_usd};

/// Where the presenter gets its records from.
#[async_trait]
pub trait ResultsProvider: Send + Sync {
    async fn fetch(&self, term: &str) -> Result<Vec<ProductRecord>>;
}

/// Calls the search API served by `product-grid`.
pub struct ApiResultsProvider {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    details: Option<String>,
}

impl ApiResultsProvider {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ResultsProvider for ApiResultsProvider {
    async fn fetch(&self, term: &str) -> Result<Vec<ProductRecord>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", term)])
            .send()
            .await
            .context("Failed to reach the search API")?;

        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response
                .json()
                .await
                .with_context(|| format!("Search API returned {}", status))?;
            return Err(anyhow!("{}", body.details.unwrap_or(body.error)));
        }

        response
            .json()
            .await
            .context("Search API returned malformed results")
    }
}

/// Canned results for working on the UI without a live site.
pub struct MockResultsProvider {
    delay: Duration,
}

impl MockResultsProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResultsProvider for MockResultsProvider {
    async fn fetch(&self, term: &str) -> Result<Vec<ProductRecord>> {
        debug!("Generating mock results for '{}'", term);
        tokio::time::sleep(self.delay).await;
        Ok(mock_results(term))
    }
}

/// Twelve placeholder records. Only the prices vary between calls.
pub fn mock_results(term: &str) -> Vec<ProductRecord> {
    let encoded = encode_uri_component(term);
    let mut rng = rand::thread_rng();

    (1..=MAX_RESULTS)
        .map(|i| ProductRecord {
            id: ProductId::Label(format!("product-{}", i)),
            title: format!("{} - Product {}", term, i),
            image_url: format!("https://via.placeholder.com/300x300?text={}+{}", encoded, i),
            url: Some(PLACEHOLDER_URL.to_string()),
            price: Some(format_usd(rng.gen_range(0.0..100.0))),
        })
        .collect()
}
