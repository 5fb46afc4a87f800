//! Simulator configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigResult;

/// Configuration for the simulator core. Every field is optional; a
/// missing config file is the same as an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HailConfig {
    /// Snapshot file path. Default: "hail_data.json".
    pub data_file: Option<PathBuf>,
    /// Fresh-start base price per kilometer, used only when no snapshot
    /// exists. Default: 8.0.
    pub base_price_per_km: Option<f64>,
}

impl HailConfig {
    /// Load from a TOML file, defaulting when the file does not exist.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Returns the effective snapshot path, defaulting to `hail_data.json`.
    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_DATA_FILE))
    }

    /// Returns the effective fresh-start base price, defaulting to 8.0.
    pub fn effective_base_price(&self) -> f64 {
        self.base_price_per_km
            .unwrap_or(constants::DEFAULT_BASE_PRICE_PER_KM)
    }
}
