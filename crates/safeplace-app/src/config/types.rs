//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings, loaded from `config.toml`.
///
/// Every field has a default so a missing or partial file always yields a
/// usable configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub datasets: DatasetSettings,
    pub icons: IconSettings,
}

/// Dataset override paths. None means the embedded default list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub sites: Option<PathBuf>,
    pub chains: Option<PathBuf>,
}

/// Icon probe behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    /// Probe icon addresses in the background and substitute the
    /// placeholder for unloadable ones
    pub probe: bool,
    /// Per-request timeout for the probe, in milliseconds
    pub probe_timeout_ms: u64,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            probe: true,
            probe_timeout_ms: 3_000,
        }
    }
}
