//! Wobble Sim - the blob's moving parts
//!
//! - `PointMass` / `BlobSimulation` - damped ring of coupled radial oscillators
//! - `ColorCycler` - continuous fill animation through a fixed palette
//! - `PointerInteractionHandler` - hover state machine that turns pointer
//!   motion into impulses on the nearest ring point
//!
//! Nothing here draws or schedules; see `wobble-render` and `wobble-runtime`.

pub mod color;
pub mod point_mass;
pub mod pointer;
pub mod simulation;

pub use color::ColorCycler;
pub use point_mass::PointMass;
pub use pointer::{HoverState, PointerEvent, PointerInteractionHandler};
pub use simulation::BlobSimulation;
