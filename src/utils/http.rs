use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION,
    UPGRADE_INSECURE_REQUESTS,
};
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::{debug, warn};

use crate::error::SearchError;

/// Client that looks like a desktop browser and never follows redirects.
///
/// No timeout is configured: a hung upstream blocks that one search.
pub fn create_client(user_agent: &str) -> Result<Client, SearchError> {
    let client = ClientBuilder::new()
        .user_agent(user_agent)
        .default_headers(browser_headers())
        .redirect(Policy::none())
        .build()?;

    Ok(client)
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers
}

/// One GET, body buffered in full. 301/302 fail instead of being followed.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, SearchError> {
    debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::FOUND {
        warn!("Redirect {} received for {}", status, url);
        return Err(SearchError::RedirectUnsupported { status });
    }

    Ok(response.text().await?)
}
