//! HTTP fetching with an ordered proxy-fallback chain.
//!
//! The listing page is fetched directly first; when that fails, each
//! configured CORS proxy is tried in order with the target URL
//! percent-encoded into it. The first successful body wins.
//!
//! # Architecture
//!
//! The module uses a trait-based design:
//! - [`FetchText`]: core trait for fetching a URL's body as text
//! - [`HttpFetcher`]: a `reqwest`-backed implementation
//! - [`FallbackFetcher`]: decorator that adds the endpoint chain to any
//!   [`FetchText`] implementation
//!
//! A short jittered delay separates consecutive attempts so a flaky
//! upstream is not hammered back-to-back.

use rand::{Rng, rng};
use reqwest::Client;
use std::error::Error;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Trait for fetching the text body of a URL.
pub trait FetchText {
    /// Fetch `url` and return its body as a string.
    async fn fetch_text(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// Direct HTTP fetcher with a browser user agent and request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given `User-Agent` header and timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl FetchText for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(
                %status,
                elapsed_ms = t0.elapsed().as_millis() as u128,
                "Request returned non-success status"
            );
            return Err(format!("HTTP error! status: {status}").into());
        }
        let body = response.text().await?;
        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Fetched page body"
        );
        Ok(body)
    }
}

/// Decorator that tries the direct URL, then each proxy, in order.
///
/// Failed attempts are logged and the chain moves on; only when every
/// endpoint has failed does the last error surface to the caller.
pub struct FallbackFetcher<T> {
    inner: T,
    proxies: Vec<String>,
    attempt_delay: Duration,
}

impl<T> FallbackFetcher<T>
where
    T: FetchText,
{
    /// Wrap `inner` with a proxy chain.
    ///
    /// `proxies` are URL prefixes the percent-encoded target is
    /// appended to, e.g. `https://api.allorigins.win/raw?url=`.
    pub fn new(inner: T, proxies: Vec<String>) -> Self {
        Self {
            inner,
            proxies,
            attempt_delay: Duration::from_millis(500),
        }
    }

    /// The ordered endpoint list for `target`: the direct URL first,
    /// then each proxy with the target percent-encoded into it.
    pub fn endpoints(&self, target: &str) -> Vec<String> {
        let encoded = urlencoding::encode(target);
        std::iter::once(target.to_string())
            .chain(self.proxies.iter().map(|proxy| format!("{proxy}{encoded}")))
            .collect()
    }
}

impl<T> FetchText for FallbackFetcher<T>
where
    T: FetchText,
{
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let endpoints = self.endpoints(url);
        let total = endpoints.len();
        let mut last_err: Option<Box<dyn Error>> = None;

        for (attempt, endpoint) in endpoints.iter().enumerate() {
            if attempt > 0 {
                let jitter_ms: u64 = rng().random_range(0..=250);
                sleep(self.attempt_delay + Duration::from_millis(jitter_ms)).await;
            }
            match self.inner.fetch_text(endpoint).await {
                Ok(body) => {
                    info!(
                        attempt = attempt + 1,
                        total,
                        endpoint = %endpoint,
                        "Fetch succeeded"
                    );
                    return Ok(body);
                }
                Err(e) => {
                    warn!(
                        attempt = attempt + 1,
                        total,
                        endpoint = %endpoint,
                        error = %e,
                        "Fetch attempt failed; trying next endpoint"
                    );
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| "no fetch endpoints configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverFetch;

    impl FetchText for NeverFetch {
        async fn fetch_text(&self, _url: &str) -> Result<String, Box<dyn Error>> {
            Err("unreachable host".into())
        }
    }

    fn chain(proxies: &[&str]) -> FallbackFetcher<NeverFetch> {
        FallbackFetcher::new(NeverFetch, proxies.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_endpoints_direct_first() {
        let fetcher = chain(&["https://proxy.example.com/?"]);
        let endpoints = fetcher.endpoints("https://pcgamer.com/news");
        assert_eq!(endpoints[0], "https://pcgamer.com/news");
        assert_eq!(endpoints.len(), 2);
    }

    #[test]
    fn test_endpoints_percent_encode_target() {
        let fetcher = chain(&["https://api.allorigins.win/raw?url="]);
        let endpoints = fetcher.endpoints("https://pcgamer.com/news");
        assert_eq!(
            endpoints[1],
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fpcgamer.com%2Fnews"
        );
    }

    #[test]
    fn test_endpoints_preserve_proxy_order() {
        let fetcher = chain(&["https://a.example.com/?", "https://b.example.com/?"]);
        let endpoints = fetcher.endpoints("https://pcgamer.com/news");
        assert!(endpoints[1].starts_with("https://a.example.com/"));
        assert!(endpoints[2].starts_with("https://b.example.com/"));
    }

    #[tokio::test]
    async fn test_fallback_surfaces_last_error() {
        let mut fetcher = chain(&[]);
        fetcher.attempt_delay = Duration::from_millis(0);
        let err = fetcher
            .fetch_text("https://pcgamer.com/news")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "unreachable host");
    }
}
