use scraper::{Html, Selector};
use tracing::debug;

use crate::error::SearchError;
use crate::models::{ProductId, ProductRecord, Source};
use crate::parsers::{absolute_link, clean_text, parse_display_price};
use crate::scrapers::ResultExtractor;

// Current Amazon search-results markup.
const RESULT_ITEM: &str = r#".s-result-item[data-component-type="s-search-result"]"#;
const TITLE_LINK: &str = "h2 .a-link-normal";
const IMAGE: &str = "img.s-image";
const PRICE: &str = ".a-price .a-offscreen";

pub struct AmazonExtractor {
    base_url: String,
}

impl AmazonExtractor {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css)
        .map_err(|e| SearchError::Parse(format!("invalid selector {}: {:?}", css, e)))
}

impl ResultExtractor for AmazonExtractor {
    fn source(&self) -> Source {
        Source::Amazon
    }

    fn extract(&self, html: &str, limit: usize) -> Result<Vec<ProductRecord>, SearchError> {
        let document = Html::parse_document(html);
        let result_selector = selector(RESULT_ITEM)?;
        let title_selector = selector(TITLE_LINK)?;
        let image_selector = selector(IMAGE)?;
        let price_selector = selector(PRICE)?;

        let mut products = Vec::new();

        for (index, element) in document.select(&result_selector).enumerate() {
            if products.len() >= limit {
                break;
            }

            let title_link = element.select(&title_selector).next();
            let title = title_link
                .map(|link| clean_text(&link.text().collect::<String>()))
                .unwrap_or_default();

            let image_url = element
                .select(&image_selector)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(|src| src.trim().to_string())
                .unwrap_or_default();

            if title.is_empty() || image_url.is_empty() {
                debug!("Skipping result {} without title or image", index);
                continue;
            }

            let url = title_link
                .and_then(|link| link.value().attr("href"))
                .and_then(|href| absolute_link(&self.base_url, href));

            let price = element
                .select(&price_selector)
                .next()
                .and_then(|p| parse_display_price(&p.text().collect::<String>()));

            products.push(ProductRecord {
                id: ProductId::Ordinal(index),
                title,
                image_url,
                url,
                price,
            });
        }

        Ok(products)
    }
}
