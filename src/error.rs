use reqwest::StatusCode;
use thiserror::Error;

use crate::models::Source;

/// Failure of a single search against the target site. None of these are
/// retried.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Redirect received, consider using a headless browser or a proxy service")]
    RedirectUnsupported { status: StatusCode },

    /// Zero usable records. A layout change and a blocked client look the same.
    #[error("No products found or {} blocked the request", .site.display_name())]
    NoResultsOrBlocked { site: Source },

    #[error("Failed to parse search results: {0}")]
    Parse(String),
}
