//! Remote asset fetching over HTTP.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use appize_core::{
    application::{ApplicationError, ports::Fetcher},
    error::{AppizeError, AppizeResult},
};

/// How long a single asset download may take before it is aborted.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP fetcher backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> AppizeResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AppizeError::Configuration {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> AppizeResult<Vec<u8>> {
        debug!(url = %url, "fetching remote asset");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApplicationError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP {}", status),
            }
            .into());
        }

        let bytes = response.bytes().map_err(|e| ApplicationError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}

/// Canned fetcher for tests. Returns pre-registered payloads and fails
/// for any unknown URL.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Vec<u8>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), bytes);
        self
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> AppizeResult<Vec<u8>> {
        self.responses.get(url).cloned().ok_or_else(|| {
            ApplicationError::Fetch {
                url: url.to_string(),
                reason: "No canned response".into(),
            }
            .into()
        })
    }
}
