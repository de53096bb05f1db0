use anyhow::Result;
use colored::Colorize;
use log::{info, warn};
use std::time::Duration;

use crate::config::settings::AppConfig;
use crate::http::{ProbeClient, ProbeResponse};

/// Requests each URL repeatedly and reports status, `X-Cache` and latency,
/// to check that a CDN in front of the service is caching responses.
pub struct ProbeService {
    client: ProbeClient,
    attempts: usize,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProbeSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub cache_hits: usize,
    pub total_latency: Duration,
}

impl ProbeSummary {
    fn record(&mut self, response: &ProbeResponse) {
        self.succeeded += 1;
        self.total_latency += response.latency;
        if response.is_cache_hit() {
            self.cache_hits += 1;
        }
    }

    pub fn average_latency(&self) -> Option<Duration> {
        u32::try_from(self.succeeded)
            .ok()
            .filter(|&n| n > 0)
            .map(|n| self.total_latency / n)
    }
}

impl ProbeService {
    pub fn new(config: &AppConfig, attempts: Option<usize>, delay_ms: Option<u64>) -> Result<Self> {
        let settings = &config.probe;
        let client = ProbeClient::new(settings, delay_ms.unwrap_or(settings.delay_ms))?;

        Ok(Self {
            client,
            attempts: attempts.unwrap_or(settings.attempts).max(1),
        })
    }

    pub async fn run(&mut self, urls: &[String]) -> Result<Vec<ProbeSummary>> {
        let mut summaries = Vec::with_capacity(urls.len());
        for url in urls {
            summaries.push(self.probe_url(url).await);
        }
        Ok(summaries)
    }

    async fn probe_url(&mut self, url: &str) -> ProbeSummary {
        println!("\n{} {}", "=== Testing URL:".bold(), url.cyan());
        info!("Probing {} ({} attempts)", url, self.attempts);

        let mut summary = ProbeSummary::default();
        for attempt in 1..=self.attempts {
            match self.client.get(url).await {
                Ok(response) => {
                    print_attempt(attempt, &response);
                    summary.record(&response);
                }
                Err(e) => {
                    eprintln!("#{} {} {:#}", attempt, "✗".red(), e);
                    warn!("Probe of {} failed: {:#}", url, e);
                    summary.failed += 1;
                }
            }
        }

        print_summary(&summary);
        summary
    }
}

fn print_attempt(attempt: usize, response: &ProbeResponse) {
    let status = if (200..400).contains(&response.status) {
        response.status.to_string().green()
    } else {
        response.status.to_string().red()
    };
    let cache = match response.cache.as_deref() {
        Some(value) if response.is_cache_hit() => value.green(),
        Some(value) => value.yellow(),
        None => "NO-HEADER".dimmed(),
    };

    println!(
        "#{} Status: {} | X-Cache: {} | Time: {}ms",
        attempt,
        status,
        cache,
        response.latency.as_millis()
    );
}

fn print_summary(summary: &ProbeSummary) {
    let average = summary
        .average_latency()
        .map(|d| format!("{}ms", d.as_millis()))
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{} {} ok, {} failed, {} cache hits, average {}",
        "→".bold(),
        summary.succeeded,
        summary.failed,
        summary.cache_hits,
        average
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_hits_and_average() {
        let mut summary = ProbeSummary::default();
        for (cache, ms) in [(Some("MISS"), 300), (Some("HIT"), 20), (Some("HIT"), 40)] {
            summary.record(&ProbeResponse {
                status: 200,
                cache: cache.map(str::to_string),
                latency: Duration::from_millis(ms),
            });
        }

        assert_eq!(summary.succeeded, 3);
        assert_eq!(summary.cache_hits, 2);
        assert_eq!(summary.average_latency(), Some(Duration::from_millis(120)));
        assert_eq!(ProbeSummary::default().average_latency(), None);
    }
}
