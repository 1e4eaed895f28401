//! Test doubles for the fetch capability.
//!
//! Useful for exercising the pipeline without network access.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::MAX_RETRIES;
use crate::error::{HarvestError, Result};
use crate::http::Fetch;

/// A mock fetcher serving canned documents from memory.
///
/// Records every requested URL so tests can assert on fetch counts. URLs
/// registered via [`MockFetcher::with_failure`] (and any unregistered URL)
/// fail with a simulated transport error.
#[derive(Default)]
pub struct MockFetcher {
    /// Canned document bodies by URL.
    pages: HashMap<String, String>,

    /// Simulated transport failures by URL.
    failures: HashMap<String, String>,

    /// Call tracking for assertions.
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    /// Create an empty mock fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    /// Fail `url` with a simulated transport error carrying `message`.
    #[must_use]
    pub fn with_failure(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(url.into(), message.into());
        self
    }

    /// Number of times `url` was requested.
    #[must_use]
    pub fn fetch_count(&self, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == url)
            .count()
    }

    /// Total number of fetch calls across all URLs.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetch for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());

        if let Some(message) = self.failures.get(url) {
            return Err(HarvestError::RetriesExhausted {
                attempts: MAX_RETRIES,
                message: message.clone(),
            });
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| HarvestError::RetriesExhausted {
                attempts: MAX_RETRIES,
                message: format!("no canned page for {url}"),
            })
    }
}
