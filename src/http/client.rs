use anyhow::{Context, Result};
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::time::sleep;

use crate::config::settings::ProbeSettings;

/// Outcome of one timed GET.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResponse {
    pub status: u16,
    pub cache: Option<String>,
    pub latency: Duration,
}

impl ProbeResponse {
    pub fn is_cache_hit(&self) -> bool {
        self.cache
            .as_deref()
            .is_some_and(|c| c.to_ascii_uppercase().contains("HIT"))
    }
}

/// HTTP client that pauses between consecutive requests and times each one.
pub struct ProbeClient {
    client: Client,
    delay: Duration,
    request_count: usize,
}

impl ProbeClient {
    pub fn new(settings: &ProbeSettings, delay_ms: u64) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<ProbeResponse> {
        if self.request_count > 0 {
            sleep(self.delay).await;
        }
        self.request_count += 1;

        let started = Instant::now();
        let response = self.send_get_request(url).await?;
        let latency = started.elapsed();

        let cache = response
            .headers()
            .get("x-cache")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(ProbeResponse {
            status: response.status().as_u16(),
            cache,
            latency,
        })
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_detection() {
        let response = |cache: Option<&str>| ProbeResponse {
            status: 200,
            cache: cache.map(str::to_string),
            latency: Duration::from_millis(5),
        };

        assert!(response(Some("Hit from cloudfront")).is_cache_hit());
        assert!(response(Some("HIT")).is_cache_hit());
        assert!(!response(Some("MISS")).is_cache_hit());
        assert!(!response(None).is_cache_hit());
    }
}
