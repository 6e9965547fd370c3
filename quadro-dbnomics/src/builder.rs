use std::time::Duration;

use crate::{DEFAULT_BASE_URL, DbnomicsConnector};

/// Builder for [`DbnomicsConnector`].
pub struct DbnomicsConnectorBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for DbnomicsConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DbnomicsConnectorBuilder {
    pub(crate) fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
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
    pub fn build(self) -> DbnomicsConnector {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("failed to construct HTTP client");
        DbnomicsConnector::from_parts(client, self.base_url)
    }
}
