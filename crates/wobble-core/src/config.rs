//! Engine configuration (parsed from TOML)

use crate::error::{Result, WobbleError};
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ambient fill palette cycled by the color animation
pub const DEFAULT_PALETTE: [u32; 6] = [0xFF9A9E, 0xFAD0C4, 0xFBC2EB, 0xA18CD1, 0x8FD3F4, 0xF6D365];

/// Fill restored when the pointer leaves the blob
pub const DEFAULT_BASE_COLOR: u32 = 0xE8506E;

/// Order in which ring points are solved within one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOrder {
    /// Point 0 first, then ascending; each point sees its already-updated
    /// left neighbor. Produces a forward ripple bias.
    #[default]
    Sequential,
    /// Every point reads the pre-tick ring (double-buffered).
    Synchronous,
}

/// Spring constants shared by every point on the ring
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub elasticity: f64,
    pub friction: f64,
    /// Pull of a point toward its own baseline, relative to neighbor coupling
    pub self_restore: f64,
    /// Speed gained per unit of acceleration
    pub speed_factor: f64,
    /// Radial displacement gained per unit of speed
    pub position_factor: f64,
    pub step_order: StepOrder,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            elasticity: 0.001,
            friction: 0.0085,
            self_restore: 0.3,
            speed_factor: 2.0,
            position_factor: 5.0,
            step_order: StepOrder::Sequential,
        }
    }
}

/// Pointer impulse tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Multiplier applied to the sample-to-sample pointer displacement
    pub impulse_scale: f64,
    /// Upper bound of the scaled displacement; also the normalizer
    pub impulse_clamp: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            impulse_scale: 10.0,
            impulse_clamp: 100.0,
        }
    }
}

/// Full blob engine configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobConfig {
    pub width: u32,
    pub height: u32,
    /// Base radius in pixels
    pub radius: f64,
    pub point_count: usize,
    /// Center position as a fraction of the surface size
    pub center_ratio: [f64; 2],
    pub base_color: Color,
    pub palette: Vec<Color>,
    /// Palette phase advance per tick
    pub color_step: f64,
    pub physics: PhysicsConfig,
    pub pointer: PointerConfig,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            radius: 150.0,
            point_count: 32,
            center_ratio: [0.5, 0.5],
            base_color: Color::from_hex(DEFAULT_BASE_COLOR),
            palette: DEFAULT_PALETTE.iter().map(|&hex| Color::from_hex(hex)).collect(),
            color_step: 0.0009,
            physics: PhysicsConfig::default(),
            pointer: PointerConfig::default(),
        }
    }
}

impl BlobConfig {
    /// Parse and validate a config from a TOML string
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.point_count < 3 {
            return Err(WobbleError::InvalidConfig(format!(
                "point_count must be at least 3, got {}",
                self.point_count
            )));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(WobbleError::InvalidConfig(format!(
                "radius must be a non-negative number, got {}",
                self.radius
            )));
        }
        if self.palette.is_empty() {
            return Err(WobbleError::InvalidConfig("palette must not be empty".into()));
        }
        if !(self.color_step > 0.0 && self.color_step <= 1.0) {
            return Err(WobbleError::ValueOutOfRange {
                field: "color_step".into(),
                min: 0.0,
                max: 1.0,
                value: self.color_step,
            });
        }
        if !(self.pointer.impulse_clamp > 0.0) || !self.pointer.impulse_clamp.is_finite() {
            return Err(WobbleError::InvalidConfig(format!(
                "pointer.impulse_clamp must be positive, got {}",
                self.pointer.impulse_clamp
            )));
        }
        if self.center_ratio.iter().any(|r| !r.is_finite()) {
            return Err(WobbleError::InvalidConfig(
                "center_ratio must contain finite values".into(),
            ));
        }
        let physics = [
            ("physics.elasticity", self.physics.elasticity),
            ("physics.friction", self.physics.friction),
            ("physics.self_restore", self.physics.self_restore),
            ("physics.speed_factor", self.physics.speed_factor),
            ("physics.position_factor", self.physics.position_factor),
        ];
        for (field, value) in physics {
            if !value.is_finite() {
                return Err(WobbleError::InvalidConfig(format!(
                    "{field} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
