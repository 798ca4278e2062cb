// File: src/config.rs
use crate::core::types::PadGeometry;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for an input pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Remaining gestures. Negative means unlimited, zero blocks input.
    pub stroke_limit: i64,
    /// Pad edge length in pixels.
    pub size: f64,
    /// Where the recognition dictionary is stored, if anywhere.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            stroke_limit: -1,
            size: 300.0,
            dictionary_path: None,
        }
    }
}

impl PadConfig {
    /// Reads a JSON config. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn geometry(&self) -> PadGeometry {
        PadGeometry::for_size(self.size)
    }
}
