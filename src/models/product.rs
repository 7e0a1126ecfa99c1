use serde::{Deserialize, Serialize};
use std::fmt;

use super::PLACEHOLDER_URL;

/// Identifier of a record: the candidate's position in the scraped page, or a
/// synthetic label for generated records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Ordinal(usize),
    Label(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Ordinal(n) => write!(f, "{}", n),
            ProductId::Label(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price(pub String);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl ProductRecord {
    /// The link a grid cell should open, if the record carries a real one.
    pub fn link(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != PLACEHOLDER_URL)
    }
}
