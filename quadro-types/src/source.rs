use serde::{Deserialize, Serialize};

/// Backing data provider for an economic series.
///
/// Each variant corresponds to exactly one connector crate. The catalog maps
/// series identifiers to a `Source`; the engine routes fetches to whichever
/// connector registered itself for that source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Source {
    /// FRED-style provider: short alphanumeric series codes over a REST/JSON
    /// API with dedicated observation endpoints.
    Fred,
    /// DBnomics-style provider: hierarchical `provider/dataset/series` codes
    /// over a REST/JSON API using periodic labels.
    Dbnomics,
    /// Deterministic in-process fixtures, for tests and examples.
    Mock,
}

impl Source {
    /// Stable lowercase tag, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fred => "fred",
            Self::Dbnomics => "dbnomics",
            Self::Mock => "mock",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
