//! quadro-core
//!
//! Core types, traits, and utilities shared across the quadro ecosystem.
//!
//! - `types`: common data structures (observations, series, date spans).
//! - `connector`: the `SeriesConnector` trait implemented by provider crates.
//! - `timeseries`: period-label normalization, slicing, and display
//!   transforms.
//!
//! Every fetch, cache hit, or transform produces a fresh
//! [`ObservationSeries`] value; nothing downstream of a connector mutates
//! series data in place. The series constructor enforces the one invariant
//! every consumer relies on: observation dates are strictly increasing and
//! unique, whatever shape the provider payload arrived in.
#![warn(missing_docs)]

/// The `SeriesConnector` trait implemented by provider crates.
pub mod connector;
/// Time-series utilities: period labels, slicing, transforms.
pub mod timeseries;
pub mod types;

pub use connector::SeriesConnector;
pub use quadro_types::{CacheConfig, EngineConfig, QuadroError, Source};
pub use timeseries::period::normalize_period_label;
pub use timeseries::slice::{SummaryMethod, slice_span, summarize};
pub use timeseries::transform::{period_change, year_over_year_percent};
pub use types::{DateSpan, Observation, ObservationSeries};
