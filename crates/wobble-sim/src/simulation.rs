//! Damped ring of coupled radial oscillators

use crate::point_mass::PointMass;
use std::f64::consts::TAU;
use wobble_core::{BlobConfig, StepOrder, Vec2};

/// The blob's physical state: a fixed ring of point masses around a center.
pub struct BlobSimulation {
    points: Vec<PointMass>,
    base_radius: f64,
    center_ratio: [f64; 2],
    surface_size: (u32, u32),
    center: Vec2,
    step_order: StepOrder,
    /// Raw accelerations for synchronous stepping, reused between ticks
    scratch: Vec<f64>,
}

impl BlobSimulation {
    pub fn new(config: &BlobConfig) -> Self {
        let count = config.point_count;
        let points = (0..count)
            .map(|i| PointMass::new(TAU * i as f64 / count as f64, &config.physics))
            .collect();

        let mut sim = Self {
            points,
            base_radius: config.radius,
            center_ratio: config.center_ratio,
            surface_size: (0, 0),
            center: Vec2::ZERO,
            step_order: config.physics.step_order,
            scratch: Vec::with_capacity(count),
        };
        sim.resize(config.width, config.height);
        sim
    }

    pub fn points(&self) -> &[PointMass] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&PointMass> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn set_base_radius(&mut self, radius: f64) {
        self.base_radius = radius.max(0.0);
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    pub fn step_order(&self) -> StepOrder {
        self.step_order
    }

    pub fn set_step_order(&mut self, order: StepOrder) {
        self.step_order = order;
    }

    /// Track a new surface size; the center follows the configured ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_size = (width, height);
        self.center = Vec2::new(
            width as f64 * self.center_ratio[0],
            height as f64 * self.center_ratio[1],
        );
    }

    /// Whether `position` lies on the tracked surface
    pub fn contains(&self, position: Vec2) -> bool {
        let (w, h) = self.surface_size;
        position.is_finite()
            && position.x >= 0.0
            && position.y >= 0.0
            && position.x < w as f64
            && position.y < h as f64
    }

    /// Push one point radially. Out-of-range indices are ignored.
    pub fn apply_impulse(&mut self, index: usize, raw_acceleration: f64) {
        if let Some(point) = self.points.get_mut(index) {
            point.apply_impulse(raw_acceleration);
        }
    }

    /// Advance the ring by one tick.
    pub fn step(&mut self) {
        let n = self.points.len();
        if n == 0 {
            return;
        }

        match self.step_order {
            StepOrder::Sequential => {
                // Point 0 sees the pre-tick values of both neighbors. Every later
                // point sees its freshly solved left neighbor, and the last point
                // wraps around to the already-updated point 0.
                for i in 0..n {
                    let left = self.points[(i + n - 1) % n].radial_effect();
                    let right = self.points[(i + 1) % n].radial_effect();
                    let raw = self.points[i].solve_with(left, right);
                    self.points[i].apply_impulse(raw);
                }
            }
            StepOrder::Synchronous => {
                self.scratch.clear();
                for i in 0..n {
                    let left = self.points[(i + n - 1) % n].radial_effect();
                    let right = self.points[(i + 1) % n].radial_effect();
                    self.scratch.push(self.points[i].solve_with(left, right));
                }
                for (point, &raw) in self.points.iter_mut().zip(self.scratch.iter()) {
                    point.apply_impulse(raw);
                }
            }
        }
    }

    /// Current surface position of every point, in ring order
    pub fn positions(&self) -> Vec<Vec2> {
        self.points
            .iter()
            .map(|p| p.position(self.center, self.base_radius))
            .collect()
    }

    /// Index of the point whose azimuth is closest to `angle`.
    ///
    /// Plain absolute difference with no wrap-around; ties keep the first.
    pub fn nearest_point(&self, angle: f64) -> Option<usize> {
        let mut nearest = None;
        let mut best = f64::INFINITY;
        for (i, point) in self.points.iter().enumerate() {
            let diff = (angle - point.azimuth()).abs();
            if diff < best {
                best = diff;
                nearest = Some(i);
            }
        }
        nearest
    }

    /// Sum of squared radial effects
    pub fn energy(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.radial_effect() * p.radial_effect())
            .sum()
    }

    /// Return every point to rest
    pub fn reset(&mut self) {
        for point in &mut self.points {
            point.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(count: usize, order: StepOrder) -> BlobConfig {
        let mut config = BlobConfig {
            point_count: count,
            radius: 100.0,
            ..Default::default()
        };
        config.physics.step_order = order;
        config
    }

    #[test]
    fn ring_layout() {
        let sim = BlobSimulation::new(&config_with(32, StepOrder::Sequential));
        assert_eq!(sim.len(), 32);
        assert_eq!(sim.center(), Vec2::new(200.0, 200.0));
        assert_eq!(sim.points()[0].azimuth(), 0.0);
        assert!((sim.points()[8].azimuth() - TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn worked_example_four_points() {
        let mut sim = BlobSimulation::new(&config_with(4, StepOrder::Sequential));
        sim.apply_impulse(0, 1.0);

        let p0 = sim.point(0).unwrap();
        assert!((p0.acceleration() - 1.0).abs() < 1e-6);
        assert!((p0.speed() - 2.0).abs() < 1e-6);
        assert!((p0.radial_effect() - 10.0).abs() < 1e-6);
        for p in &sim.points()[1..] {
            assert_eq!(p.radial_effect(), 0.0);
        }
    }

    #[test]
    fn rest_stays_at_rest() {
        let mut sim = BlobSimulation::new(&config_with(32, StepOrder::Sequential));
        for _ in 0..1000 {
            sim.step();
            assert_eq!(sim.energy(), 0.0);
        }
    }

    // Sum of squares can rise on single ticks while the wave spreads, so only
    // the per-window peak is checked for monotonic decay
    #[test]
    fn energy_envelope_decays() {
        for order in [StepOrder::Sequential, StepOrder::Synchronous] {
            let mut sim = BlobSimulation::new(&config_with(32, order));
            sim.apply_impulse(5, 1.0);

            let mut peaks = Vec::new();
            for _ in 0..30 {
                let mut peak = 0.0_f64;
                for _ in 0..200 {
                    sim.step();
                    peak = peak.max(sim.energy());
                }
                peaks.push(peak);
            }

            for pair in peaks.windows(2) {
                assert!(pair[1] <= pair[0], "{order:?}: {} > {}", pair[1], pair[0]);
            }
            assert!(peaks[peaks.len() - 1] < 1e-9, "{order:?} did not settle");
        }
    }

    #[test]
    fn synchronous_impulse_reaches_only_neighbors_in_one_tick() {
        let mut sim = BlobSimulation::new(&config_with(32, StepOrder::Synchronous));
        sim.apply_impulse(5, 1.0);
        sim.step();

        for (i, p) in sim.points().iter().enumerate() {
            if (4..=6).contains(&i) {
                assert!(p.acceleration() != 0.0, "point {i} should react");
            } else {
                assert_eq!(p.acceleration(), 0.0, "point {i} should be untouched");
            }
        }
    }

    #[test]
    fn sequential_order_ripples_forward() {
        let mut sim = BlobSimulation::new(&config_with(32, StepOrder::Sequential));
        sim.apply_impulse(5, 1.0);
        sim.step();

        // Behind the impulse only the direct neighbor reacts
        assert_eq!(sim.point(3).unwrap().acceleration(), 0.0);
        assert_eq!(sim.point(0).unwrap().acceleration(), 0.0);
        assert!(sim.point(4).unwrap().acceleration() != 0.0);
        // Ahead of it the freshly solved left neighbors carry the wave on
        assert!(sim.point(9).unwrap().acceleration() != 0.0);
    }

    #[test]
    fn wave_reaches_whole_ring() {
        let mut sim = BlobSimulation::new(&config_with(32, StepOrder::Sequential));
        sim.apply_impulse(5, 1.0);

        let mut max_abs = vec![0.0_f64; sim.len()];
        for _ in 0..400 {
            sim.step();
            for (m, p) in max_abs.iter_mut().zip(sim.points()) {
                *m = m.max(p.radial_effect().abs());
            }
        }
        assert!(max_abs.iter().all(|&m| m > 1.0));
    }

    #[test]
    fn position_contract_every_tick() {
        let mut sim = BlobSimulation::new(&config_with(32, StepOrder::Sequential));
        sim.apply_impulse(3, 0.7);
        sim.apply_impulse(20, -0.4);

        for _ in 0..50 {
            sim.step();
            let center = sim.center();
            for (p, pos) in sim.points().iter().zip(sim.positions()) {
                let r = sim.base_radius() + p.radial_effect();
                let expected = Vec2::new(
                    center.x + p.azimuth().cos() * r,
                    center.y + p.azimuth().sin() * r,
                );
                assert!(pos.distance(&expected) < 1e-9);
            }
        }
    }

    #[test]
    fn nearest_point_uses_plain_difference() {
        let sim = BlobSimulation::new(&config_with(4, StepOrder::Sequential));
        // Azimuths: 0, PI/2, PI, 3PI/2
        assert_eq!(sim.nearest_point(0.1), Some(0));
        assert_eq!(sim.nearest_point(1.5), Some(1));
        // -PI/2 is geometrically point 3, but without wrap point 0 is closer
        assert_eq!(sim.nearest_point(-std::f64::consts::FRAC_PI_2), Some(0));
        // Exactly between 0 and PI/2: first minimum wins
        assert_eq!(sim.nearest_point(std::f64::consts::FRAC_PI_4), Some(0));
    }

    #[test]
    fn zero_sized_surface() {
        let mut sim = BlobSimulation::new(&config_with(8, StepOrder::Sequential));
        sim.resize(0, 0);
        assert_eq!(sim.center(), Vec2::ZERO);
        assert!(!sim.contains(Vec2::ZERO));
        sim.step();
        assert!(sim.positions().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn reset_and_out_of_range_impulse() {
        let mut sim = BlobSimulation::new(&config_with(8, StepOrder::Sequential));
        sim.apply_impulse(99, 1.0);
        assert_eq!(sim.energy(), 0.0);

        sim.apply_impulse(2, 1.0);
        sim.step();
        assert!(sim.energy() > 0.0);
        sim.reset();
        assert_eq!(sim.energy(), 0.0);
    }
}
