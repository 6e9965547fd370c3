use std::collections::HashMap;
use std::sync::Arc;

use quadro_core::SeriesConnector;
use quadro_middleware::CachingConnector;
use quadro_types::{CacheConfig, EngineConfig, QuadroError, Source};

use crate::catalog::Catalog;

/// Orchestrator that routes series requests across registered connectors.
pub struct Quadro {
    pub(crate) connectors: HashMap<Source, Arc<dyn SeriesConnector>>,
    pub(crate) catalog: Catalog,
    pub(crate) cfg: EngineConfig,
    pub(crate) default_source: Source,
}

impl std::fmt::Debug for Quadro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quadro")
            .field("connectors", &self.connectors.keys().collect::<Vec<_>>())
            .field("default_source", &self.default_source)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Quadro`] engine with custom configuration.
pub struct QuadroBuilder {
    connectors: Vec<Arc<dyn SeriesConnector>>,
    catalog: Option<Catalog>,
    cfg: EngineConfig,
    default_source: Source,
    cache: Option<CacheConfig>,
}

impl Default for QuadroBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadroBuilder {
    /// Create a new builder with sensible defaults: the built-in catalog,
    /// a concurrency bound of five, and unknown identifiers routed to the
    /// FRED-style source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            catalog: None,
            cfg: EngineConfig::default(),
            default_source: Source::Fred,
            cache: None,
        }
    }

    /// Register a connector. The engine routes each catalog source to the
    /// connector that declared it; registering two connectors for the same
    /// source is a configuration mistake and fails at build time.
    #[must_use]
    pub fn with_connector(mut self, connector: Arc<dyn SeriesConnector>) -> Self {
        self.connectors.push(connector);
        self
    }

    /// Replace the built-in catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Wrap every registered connector in a TTL read-through cache.
    #[must_use]
    pub const fn with_cache(mut self, cfg: CacheConfig) -> Self {
        self.cache = Some(cfg);
        self
    }

    /// Bound on concurrently in-flight fetches during multi-series requests.
    #[must_use]
    pub const fn max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.cfg.max_concurrency = max_concurrency;
        self
    }

    /// Per-source request timeout. A timeout error-tags only the series
    /// being fetched.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Default years of history when the caller does not specify.
    #[must_use]
    pub const fn default_years(mut self, years: u32) -> Self {
        self.cfg.default_years = Some(years);
        self
    }

    /// Source assumed for identifiers the catalog does not know. Callers
    /// probing LLM-suggested candidates rely on this fallback.
    #[must_use]
    pub const fn default_source(mut self, source: Source) -> Self {
        self.default_source = source;
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors are registered, or if two
    /// connectors claim the same source.
    pub fn build(self) -> Result<Quadro, QuadroError> {
        if self.connectors.is_empty() {
            return Err(QuadroError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        let mut connectors: HashMap<Source, Arc<dyn SeriesConnector>> = HashMap::new();
        for connector in self.connectors {
            let source = connector.source();
            let wrapped: Arc<dyn SeriesConnector> = match &self.cache {
                Some(cache_cfg) => Arc::new(CachingConnector::new(connector, cache_cfg)),
                None => connector,
            };
            if connectors.insert(source, wrapped).is_some() {
                return Err(QuadroError::InvalidArg(format!(
                    "two connectors registered for source {source}"
                )));
            }
        }

        Ok(Quadro {
            connectors,
            catalog: self.catalog.unwrap_or_else(Catalog::builtin),
            cfg: self.cfg,
            default_source: self.default_source,
        })
    }
}

impl Quadro {
    /// Start building a new `Quadro` engine.
    ///
    /// Typical usage registers one connector per backing source:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let engine = quadro::Quadro::builder()
    ///     .with_connector(Arc::new(fred))
    ///     .with_connector(Arc::new(dbnomics))
    ///     .with_cache(quadro::CacheConfig::default())
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> QuadroBuilder {
        QuadroBuilder::new()
    }

    /// The read-only series catalog this engine routes with.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Wrap a source future with the configured timeout, mapping expiry to
    /// a `SourceTimeout` error for that series only.
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source: Source,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, QuadroError>
    where
        Fut: core::future::Future<Output = Result<T, QuadroError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(QuadroError::source_timeout(source)))
    }
}
