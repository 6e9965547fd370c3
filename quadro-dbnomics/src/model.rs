//! Serde models for the provider's native payloads.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct DbnomicsResponse {
    #[serde(default)]
    pub series: DbnomicsSeriesEnvelope,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DbnomicsSeriesEnvelope {
    #[serde(default)]
    pub docs: Vec<DbnomicsSeriesDoc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DbnomicsSeriesDoc {
    /// Periodic labels aligned index-wise with `value`.
    #[serde(default)]
    pub period: Vec<String>,
    /// `null` marks a missing observation.
    #[serde(default)]
    pub value: Vec<Option<f64>>,
    #[serde(default)]
    pub series_name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, rename = "@frequency")]
    pub frequency: String,
}
