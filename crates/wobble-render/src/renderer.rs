//! Per-frame outline rendering

use crate::path::BlobPath;
use crate::surface::DrawingSurface;
use log::trace;
use wobble_core::{Color, Vec2};

/// Builds the blob outline from ring positions and fills it on a surface.
#[derive(Debug, Default)]
pub struct CurveRenderer {
    last_path: BlobPath,
    frames_drawn: u64,
}

impl CurveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one frame. Returns false, leaving the surface untouched, when it
    /// is unavailable or has no area.
    pub fn draw<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        points: &[Vec2],
        color: Color,
    ) -> bool {
        let (width, height) = surface.size();
        if width == 0 || height == 0 || !surface.is_available() {
            trace!("skipping draw on {}x{} surface", width, height);
            return false;
        }

        self.last_path = BlobPath::from_ring(points);
        surface.clear();
        if !self.last_path.is_empty() {
            surface.fill_path(&self.last_path, color);
        }
        self.frames_drawn += 1;
        true
    }

    /// Outline produced by the most recent successful draw
    pub fn last_path(&self) -> &BlobPath {
        &self.last_path
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PathRecorder;

    fn ring() -> Vec<Vec2> {
        (0..8)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / 8.0;
                Vec2::new(50.0 + 20.0 * a.cos(), 50.0 + 20.0 * a.sin())
            })
            .collect()
    }

    #[test]
    fn draws_one_closed_fill_per_frame() {
        let mut renderer = CurveRenderer::new();
        let mut surface = PathRecorder::new(100, 100);
        let color = Color::from_hex(0xFBC2EB);

        assert!(renderer.draw(&mut surface, &ring(), color));
        assert!(renderer.draw(&mut surface, &ring(), color));

        assert_eq!(surface.fills().len(), 1);
        assert_eq!(surface.clear_count(), 2);
        let fill = surface.last_fill().unwrap();
        assert_eq!(fill.color, color);
        assert_eq!(fill.path.start(), fill.path.end());
        assert_eq!(renderer.frames_drawn(), 2);
    }

    #[test]
    fn zero_sized_surface_is_noop() {
        let mut renderer = CurveRenderer::new();
        let mut surface = PathRecorder::new(0, 100);
        assert!(!renderer.draw(&mut surface, &ring(), Color::WHITE));
        assert_eq!(surface.clear_count(), 0);
        assert!(surface.fills().is_empty());
    }

    #[test]
    fn unavailable_surface_is_skipped() {
        let mut renderer = CurveRenderer::new();
        let mut surface = PathRecorder::new(100, 100);
        surface.set_available(false);
        assert!(!renderer.draw(&mut surface, &ring(), Color::WHITE));
        assert_eq!(renderer.frames_drawn(), 0);

        surface.set_available(true);
        assert!(renderer.draw(&mut surface, &ring(), Color::WHITE));
    }

    #[test]
    fn works_through_trait_object() {
        let mut renderer = CurveRenderer::new();
        let mut recorder = PathRecorder::new(100, 100);
        let surface: &mut dyn DrawingSurface = &mut recorder;
        assert!(renderer.draw(surface, &ring(), Color::BLACK));
        assert_eq!(renderer.last_path().curve_count(), 8);
    }
}
