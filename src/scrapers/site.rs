use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::error::SearchError;
use crate::models::{ProductRecord, Source, MAX_RESULTS};
use crate::parsers::encode_uri_component;
use crate::scrapers::{ProductSearch, ResultExtractor};
use crate::utils::http::fetch_page;

/// Fetches one results page per search and hands the markup to `E`.
pub struct SiteSearcher<E> {
    client: Client,
    config: SourceConfig,
    extractor: E,
}

impl<E: ResultExtractor> SiteSearcher<E> {
    pub fn new(client: Client, config: SourceConfig, extractor: E) -> Self {
        Self {
            client,
            config,
            extractor,
        }
    }
}

pub fn build_search_url(config: &SourceConfig, term: &str) -> String {
    format!(
        "{}{}?{}={}",
        config.base_url.trim_end_matches('/'),
        config.search_path,
        config.query_param,
        encode_uri_component(term)
    )
}

#[async_trait]
impl<E: ResultExtractor> ProductSearch for SiteSearcher<E> {
    async fn search(&self, term: &str) -> Result<Vec<ProductRecord>, SearchError> {
        let site = self.extractor.source();
        let url = build_search_url(&self.config, term);
        info!("Searching {} for '{}'", site.display_name(), term);

        let html = fetch_page(&self.client, &url).await?;
        let products = self.extractor.extract(&html, MAX_RESULTS)?;

        if products.is_empty() {
            warn!("No usable results on {} for '{}'", site.display_name(), term);
            return Err(SearchError::NoResultsOrBlocked { site });
        }

        info!("Found {} products on {}", products.len(), site.display_name());
        Ok(products)
    }

    fn source(&self) -> Source {
        self.extractor.source()
    }
}
