//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_page_size() -> usize {
    crate::pagination::DEFAULT_PAGE_SIZE
}

fn default_timeout() -> u64 {
    30
}

/// Console-side settings for reaching the platform API.
#[derive(Clone, Debug, Deserialize)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    /// Bearer token attached to every request when present.
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}
