//! Wobble Core - Foundational types for the Wobble blob engine
//!
//! This crate provides the types every other Wobble crate depends on:
//! - `Vec2` - 2D surface-space vector
//! - `Color` - RGBA color with hex parsing and interpolation
//! - `BlobConfig` - TOML-backed engine configuration
//! - Error types and Result alias

mod config;
mod error;
mod types;

pub use config::{
    BlobConfig, PhysicsConfig, PointerConfig, StepOrder, DEFAULT_BASE_COLOR, DEFAULT_PALETTE,
};
pub use error::{Result, WobbleError};
pub use types::{Color, Vec2};
