//! Serde models for the provider's native payloads.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct FredObservationsResponse {
    #[serde(default)]
    pub observations: Vec<FredObservation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FredObservation {
    pub date: String,
    /// Reported as a string; the literal "." marks a missing value.
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FredSeriesInfoResponse {
    #[serde(default)]
    pub seriess: Vec<FredSeriesInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FredSeriesInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub frequency: String,
}
