use std::time::Duration;

use crate::{DEFAULT_BASE_URL, FredConnector};

/// Builder for [`FredConnector`].
///
/// The base URL override exists for tests (point it at a local mock server)
/// and self-hosted mirrors.
pub struct FredConnectorBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl FredConnectorBuilder {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Override the API base URL (no trailing slash).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the connector.
    ///
    /// # Panics
    /// Panics if the underlying HTTP client cannot be constructed, which only
    /// happens when the TLS backend is unavailable.
    #[must_use]
    pub fn build(self) -> FredConnector {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("failed to construct HTTP client");
        FredConnector::from_parts(client, self.base_url, self.api_key)
    }
}
