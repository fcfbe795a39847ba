use crate::severity::Severity;
use anyhow::Context as _;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

/// Settings for a [`crate::stub::StubLogger`], e.g. from a test fixture.
///
/// ```
/// let config = stub_logger::config::StubLoggerConfig::from_toml_str(
///     "minimum_severity = \"warning\"",
/// )
/// .unwrap();
/// assert_eq!(config.minimum_severity, stub_logger::severity::Severity::Warning);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StubLoggerConfig {
    /// Threshold for the "is enabled" query, recording is never filtered.
    #[serde(default)]
    pub minimum_severity: Severity,
}

impl StubLoggerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse stub logger config")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize stub logger config")
    }
}
