pub mod price;

pub use price::*;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left untouched by `encodeURIComponent` in browsers.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Trim and collapse runs of whitespace. Input is DOM text, so entities are
/// already decoded and must not be decoded again.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Link for a result's `href`: root-relative paths (including `//...`) are
/// appended to the site origin, absolute http(s) URLs are kept, anything else
/// (`javascript:`, fragments, bare relative paths) has no usable link.
pub fn absolute_link(base_url: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.starts_with('/') {
        return Some(format!("{}{}", base_url.trim_end_matches('/'), href));
    }

    match Url::parse(href) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(href.to_string()),
        _ => None,
    }
}

pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}
