use async_trait::async_trait;
use std::sync::Arc;

use crate::config::SourceConfig;
use crate::error::SearchError;
use crate::models::{ProductRecord, Source};
use crate::utils::http::create_client;

mod amazon;
mod site;

pub use amazon::AmazonExtractor;
pub use site::{build_search_url, SiteSearcher};

/// Turns a search phrase into at most `MAX_RESULTS` records.
#[async_trait]
pub trait ProductSearch: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<ProductRecord>, SearchError>;
    fn source(&self) -> Source;
}

/// Site-specific markup handling. Selectors go stale when the site changes its
/// layout, so they live here and nowhere else.
pub trait ResultExtractor: Send + Sync {
    fn source(&self) -> Source;

    /// Records in document order, at most `limit`. Candidates without a title
    /// or image are skipped and do not count toward `limit`.
    fn extract(&self, html: &str, limit: usize) -> Result<Vec<ProductRecord>, SearchError>;
}

pub fn searcher_for(config: &SourceConfig) -> Result<Arc<dyn ProductSearch>, SearchError> {
    let client = create_client(&config.user_agent)?;

    let searcher: Arc<dyn ProductSearch> = match config.site {
        Source::Amazon => Arc::new(SiteSearcher::new(
            client,
            config.clone(),
            AmazonExtractor::new(&config.base_url),
        )),
    };

    Ok(searcher)
}
