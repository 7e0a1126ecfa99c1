use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Price;

static PRICE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[$€£]\s?\d{1,3}(?:,\d{3})*(?:\.\d{2})?")
        .expect("Invalid price regex")
});

/// Pull the first currency amount out of a price label, e.g. `"$1,299.99"`.
pub fn parse_display_price(price_text: &str) -> Option<Price> {
    PRICE_REGEX
        .find(price_text)
        .map(|m| Price(m.as_str().replace(' ', "")))
}

/// Format a dollar amount the way generated listings show it.
pub fn format_usd(amount: f64) -> Price {
    Price(format!("${:.2}", amount))
}
