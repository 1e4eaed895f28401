//! HTTP fetch capability.
//!
//! The pipeline consumes transport through the [`Fetch`] trait so the core
//! can run against canned documents in tests. [`HttpFetcher`] is the real
//! implementation; retry and timeout policy live here, not in the
//! orchestrator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{HTTP_TIMEOUT_SECS, MAX_RETRIES, RETRY_BASE_DELAY_MS};
use crate::error::{HarvestError, Result};

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("tagatlas/", env!("CARGO_PKG_VERSION"));

/// Transport capability consumed by the pipeline.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch a document body as text.
    ///
    /// A transport failure is scoped by the caller: fatal for the index
    /// document, per-descriptor for detail documents.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// `reqwest`-backed fetcher with timeout, user agent, and transient retry.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default client configuration.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        download_text(&self.client, url).await
    }
}

/// Download text content from a URL with retry logic.
///
/// Uses exponential backoff for transient failures (network errors, 5xx
/// responses). Client errors (4xx) are never retried - they won't succeed.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
pub async fn download_text(client: &Client, url: &str) -> Result<String> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms, 2000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                let response = response.error_for_status()?;
                return Ok(response.text().await?);
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(HarvestError::Http(e));
            }
        }
    }

    Err(HarvestError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}
