// src/config.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::polygon::{AxisConvention, RecordLayout};

/// Settings for a generation run. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base seed. Polygon `k` of a batch is generated from `seed + k`.
    /// A random seed is drawn (and logged) when absent.
    pub seed: Option<u64>,
    /// Coordinate frame used when emitting records.
    pub convention: AxisConvention,
    pub layout: RecordLayout,
    /// Generate the polygons of a batch on the rayon thread pool.
    pub parallel: bool,
    /// Check every generated polygon before emitting it.
    pub verify: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            convention: AxisConvention::Standard,
            layout: RecordLayout::SingleLine,
            parallel: true,
            verify: false,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
