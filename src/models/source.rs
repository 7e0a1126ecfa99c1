use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Amazon,
}

impl Source {
    pub fn key(&self) -> &'static str {
        match self {
            Source::Amazon => "amazon",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Amazon => "Amazon",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "amazon" => Some(Source::Amazon),
            _ => None,
        }
    }
}
