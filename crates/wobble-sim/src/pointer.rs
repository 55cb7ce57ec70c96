//! Pointer hover tracking and impulse injection

use crate::simulation::BlobSimulation;
use log::debug;
use wobble_core::{PointerConfig, Vec2};

/// Whether the pointer is currently over the blob
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering,
}

/// Emitted when a pointer sample crosses the blob's base radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Entered { point: usize, impulse: f64 },
    Exited { point: usize, impulse: f64 },
}

impl PointerEvent {
    pub fn point(&self) -> usize {
        match self {
            PointerEvent::Entered { point, .. } | PointerEvent::Exited { point, .. } => *point,
        }
    }

    pub fn impulse(&self) -> f64 {
        match self {
            PointerEvent::Entered { impulse, .. } | PointerEvent::Exited { impulse, .. } => *impulse,
        }
    }
}

/// Two-state hover machine. Each crossing of the base radius pushes the ring
/// point nearest the crossing angle, harder the faster the pointer moved.
#[derive(Clone, Debug, Default)]
pub struct PointerInteractionHandler {
    state: HoverState,
    position: Option<Vec2>,
    previous: Option<Vec2>,
    config: PointerConfig,
}

impl PointerInteractionHandler {
    pub fn new(config: PointerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn is_hovering(&self) -> bool {
        self.state == HoverState::Hovering
    }

    /// Last accepted sample
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Sample accepted before the last one
    pub fn previous(&self) -> Option<Vec2> {
        self.previous
    }

    /// Normalized impulse strength for a move from `from` to `to`, in [0, 1]
    pub fn impulse_strength(&self, from: Vec2, to: Vec2) -> f64 {
        let raw = (from.distance(&to) * self.config.impulse_scale).min(self.config.impulse_clamp);
        raw / self.config.impulse_clamp
    }

    /// Feed one raw pointer sample. Samples off the tracked surface are
    /// dropped without touching any state.
    pub fn handle_sample(
        &mut self,
        sample: Vec2,
        sim: &mut BlobSimulation,
    ) -> Option<PointerEvent> {
        if !sim.contains(sample) {
            return None;
        }

        let center = sim.center();
        let distance = sample.distance(&center);
        let inside = distance < sim.base_radius();

        let event = match (self.state, inside) {
            (HoverState::Idle, true) => {
                self.state = HoverState::Hovering;
                self.push_nearest(sample, sim)
                    .map(|(point, impulse)| PointerEvent::Entered { point, impulse })
            }
            (HoverState::Hovering, false) => {
                self.state = HoverState::Idle;
                self.push_nearest(sample, sim)
                    .map(|(point, impulse)| PointerEvent::Exited { point, impulse })
            }
            _ => None,
        };

        self.previous = Some(self.position.unwrap_or(sample));
        self.position = Some(sample);
        event
    }

    fn push_nearest(&self, sample: Vec2, sim: &mut BlobSimulation) -> Option<(usize, f64)> {
        let angle = (sample - sim.center()).angle();
        let point = sim.nearest_point(angle)?;

        // First sample has nothing to measure against
        let from = self.position.unwrap_or(sample);
        let strength = self.impulse_strength(from, sample);
        let impulse = if self.is_hovering() { -strength } else { strength };

        sim.apply_impulse(point, impulse);
        debug!(
            "pointer {:?} at angle {:.3}: point {} impulse {:.3}",
            self.state, angle, point, impulse
        );
        Some((point, impulse))
    }

    /// Forget the pointer entirely (e.g. when it leaves the host view)
    pub fn reset(&mut self) {
        self.state = HoverState::Idle;
        self.position = None;
        self.previous = None;
    }
}
