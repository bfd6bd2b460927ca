//! Runtime configuration loaded from an optional YAML file.
//!
//! Every field has a compiled-in default, so the application runs with
//! no config file at all; a partial file only overrides the fields it
//! names.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing::debug;

/// Listing page scraped when no other target is configured.
pub const DEFAULT_TARGET_URL: &str = "https://pcgamer.com/news";

/// Browser user agent sent with every request; the listing site serves
/// a different (scraper-hostile) page to unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Public CORS proxies tried in order after the direct fetch fails.
static DEFAULT_PROXIES: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        "https://api.allorigins.win/raw?url=".to_string(),
        "https://corsproxy.io/?".to_string(),
        "https://api.codetabs.com/v1/proxy?quest=".to_string(),
    ]
});

/// Application configuration.
///
/// Loaded from YAML via [`load_config`], or constructed with
/// [`Default::default`] when no `--config` path is given. CLI flags
/// override individual fields after loading.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedConfig {
    /// The news listing page to scrape.
    pub target_url: String,
    /// `User-Agent` header for all requests.
    pub user_agent: String,
    /// Ordered proxy URL prefixes for the fallback chain.
    pub proxies: Vec<String>,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Substitute the built-in sample articles when every endpoint
    /// fails, instead of exiting with an error page.
    pub sample_fallback: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxies: DEFAULT_PROXIES.clone(),
            request_timeout_ms: 10_000,
            sample_fallback: true,
        }
    }
}

/// Load configuration from a YAML file.
pub fn load_config(path: &str) -> Result<FeedConfig, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config: FeedConfig = serde_yaml::from_str(&raw)?;
    debug!(path, target_url = %config.target_url, proxies = config.proxies.len(), "Parsed configuration");
    Ok(config)
}
