//! Quadro resolves economic data queries against pluggable providers.
//!
//! Overview
//! - Routes series identifiers to connectors that implement the
//!   `quadro_core` contract, via a static catalog merged with optional
//!   externally supplied plan tables.
//! - Fetches multi-series requests concurrently with a bounded fan-out;
//!   one failing source never affects its siblings.
//! - Classifies a query's temporal shape (compare / filter / current) with
//!   an ordered rule list, compare rules strictly before filter rules.
//! - Slices full history into primary/reference sub-ranges and computes
//!   point-to-point comparison metrics.
//! - Validates the result against the intent and, when a comparison is
//!   unfulfillable, downgrades it once to "show full history" with an
//!   explanatory note.
//!
//! Key behaviors and trade-offs
//! - Comparison metrics are point-to-point (most recent observation in each
//!   sub-range), not averaged: reproducible and matching how headline
//!   figures are quoted. Alternate summarization is available via
//!   [`quadro_core::summarize`].
//! - A compare intent's primary period starts exactly where the reference
//!   period ends, running open-ended to the present. The asymmetry is
//!   deliberate: it prevents window overlap that would corrupt the
//!   comparison (one boundary date may land in both sub-ranges).
//! - Self-correction is applied at most once per query and never re-runs on
//!   the corrected intent.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use quadro::Quadro;
//! use quadro_fred::FredConnector;
//! use quadro_dbnomics::DbnomicsConnector;
//!
//! let engine = Quadro::builder()
//!     .with_connector(Arc::new(FredConnector::builder(api_key).build()))
//!     .with_connector(Arc::new(DbnomicsConnector::builder().build()))
//!     .with_cache(Default::default())
//!     .build()?;
//!
//! let resolution = engine
//!     .resolve(
//!         "how has unemployment changed since pre-pandemic?",
//!         &["UNRATE".to_string()],
//!         None,
//!     )
//!     .await;
//! if let Some(metric) = resolution.data.metric("UNRATE") {
//!     println!("{metric}");
//! }
//! ```
#![warn(missing_docs)]

pub mod catalog;
pub(crate) mod core;
pub mod extract;
pub mod intent;
mod resolve;
mod router;
pub mod validate;

pub use crate::core::{Quadro, QuadroBuilder};
pub use catalog::{Catalog, Category, Change, DisplayTransform, Measure, QueryPlan, SeriesMetadata};
pub use extract::{ComparisonMetric, Direction, MultiPeriodData, extract_periods};
pub use intent::{ComparisonKind, IntentKind, TemporalIntent, resolve_intent};
pub use resolve::QueryResolution;
pub use validate::{Severity, ValidationIssue, ValidationResult, self_correct, validate};

// Re-export core types for convenience
pub use quadro_core::{
    DateSpan, Observation, ObservationSeries, QuadroError, SeriesConnector, Source, SummaryMethod,
};
pub use quadro_types::{CacheConfig, EngineConfig};
