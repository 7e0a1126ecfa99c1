use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Source;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
    pub presenter: PresenterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// Where and how the search-results page is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub site: Source,
    pub base_url: String,
    pub search_path: String,
    pub query_param: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Network,
    Mock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenterConfig {
    pub provider: ProviderKind,
    pub endpoint_url: String,
    pub mock_delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            site: Source::Amazon,
            base_url: "https://www.amazon.com".to_string(),
            search_path: "/s".to_string(),
            query_param: "k".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: "127.0.0.1:3000".to_string(),
            },
            source: SourceConfig::default(),
            presenter: PresenterConfig {
                provider: ProviderKind::Mock,
                endpoint_url: "http://127.0.0.1:3000/api/search-amazon".to_string(),
                mock_delay_ms: 1500,
            },
        }
    }
}

impl Config {
    /// Defaults, then `product_grid.toml` if present, then
    /// `PRODUCT_GRID__<SECTION>__<KEY>` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(
            ::config::File::with_name("product_grid").required(false),
            env_overrides(),
        )
    }

    /// Layers `file` and then `env` over the built-in defaults.
    pub fn load_from<F, E>(file: F, env: E) -> Result<Self>
    where
        F: ::config::Source + Send + Sync + 'static,
        E: ::config::Source + Send + Sync + 'static,
    {
        let defaults = ::config::Config::try_from(&Config::default())
            .context("Failed to build default configuration")?;

        let settings = ::config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to load configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }
}

fn env_overrides() -> ::config::Environment {
    ::config::Environment::with_prefix("PRODUCT_GRID")
        .prefix_separator("__")
        .separator("__")
}
