//! A single boundary point of the blob

use wobble_core::{PhysicsConfig, Vec2};

/// One point on the blob's ring.
///
/// The angular slot is fixed at construction; only the radial state moves.
#[derive(Clone, Debug)]
pub struct PointMass {
    azimuth: f64,
    unit_direction: Vec2,
    radial_effect: f64,
    speed: f64,
    acceleration: f64,
    pub elasticity: f64,
    pub friction: f64,
    self_restore: f64,
    speed_factor: f64,
    position_factor: f64,
}

impl PointMass {
    pub fn new(azimuth: f64, physics: &PhysicsConfig) -> Self {
        Self {
            azimuth,
            unit_direction: Vec2::from_angle(azimuth),
            radial_effect: 0.0,
            speed: 0.0,
            acceleration: 0.0,
            elasticity: physics.elasticity,
            friction: physics.friction,
            self_restore: physics.self_restore,
            speed_factor: physics.speed_factor,
            position_factor: physics.position_factor,
        }
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    pub fn unit_direction(&self) -> Vec2 {
        self.unit_direction
    }

    /// Signed deviation from the base radius
    pub fn radial_effect(&self) -> f64 {
        self.radial_effect
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Apply a raw acceleration and cascade it through the state:
    /// acceleration, then speed, then radial displacement from the new speed.
    pub fn apply_impulse(&mut self, raw_acceleration: f64) {
        self.acceleration = raw_acceleration;
        self.speed += self.speed_factor * raw_acceleration;
        self.radial_effect += self.position_factor * self.speed;
    }

    /// Raw acceleration given the neighbors' current radial effects
    pub fn solve_with(&self, left: f64, right: f64) -> f64 {
        let r = self.radial_effect;
        (-self.self_restore * r + (left - r) + (right - r)) * self.elasticity
            - self.speed * self.friction
    }

    /// Surface position, always derived from the current radial effect
    pub fn position(&self, center: Vec2, base_radius: f64) -> Vec2 {
        center + self.unit_direction * (base_radius + self.radial_effect)
    }

    /// Back to rest without touching the angular slot
    pub fn reset(&mut self) {
        self.radial_effect = 0.0;
        self.speed = 0.0;
        self.acceleration = 0.0;
    }
}
