//! CLI command implementations

pub mod config;
pub mod path;
pub mod render;
pub mod run;

use anyhow::{Context, Result};
use wobble_core::BlobConfig;

/// Load a config file, or fall back to defaults when none is given
pub fn load_config(path: Option<&str>) -> Result<BlobConfig> {
    match path {
        Some(p) => BlobConfig::load(p).with_context(|| format!("Failed to load config {}", p)),
        None => Ok(BlobConfig::default()),
    }
}

/// Scripted pointer that periodically sweeps horizontally through the blob,
/// slightly below its center.
pub struct PointerSweep {
    width: f64,
    y: f64,
    /// Frames spent crossing the surface
    pub duration: u64,
    /// Frames between the starts of two sweeps
    pub period: u64,
}

impl PointerSweep {
    pub fn new(config: &BlobConfig) -> Self {
        let center_y = config.height as f64 * config.center_ratio[1];
        Self {
            width: config.width as f64,
            y: center_y + config.radius * 0.3,
            duration: 60,
            period: 240,
        }
    }

    /// Pointer position for a frame, or None while the pointer is away
    pub fn sample(&self, frame: u64) -> Option<(f64, f64)> {
        let phase = frame % self.period.max(1);
        if phase >= self.duration {
            return None;
        }
        let x = self.width * phase as f64 / self.duration as f64;
        Some((x, self.y))
    }
}
