use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_LOCALE;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub explorer: ExplorerConfig,
}

/// Settings for the country-data API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the country API (e.g., "https://restcountries.com/v3.1").
    ///
    /// No default: the client refuses to start without one.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Translation key used for display names (default: "por").
    #[serde(default = "default_locale")]
    pub locale: String,
}

/// Settings for the interactive explorer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Quiet period before a typed search term is applied (default: 300).
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: default_timeout_seconds(),
            locale: default_locale(),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with every other setting defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }
}
