//! CPU rasterizer backed by an `image::RgbaImage`
//!
//! Paths are flattened to polygons and filled with a non-zero winding
//! scanline pass. Each pixel row is sampled on `SUBSAMPLES` sub-scanlines
//! with exact horizontal span coverage, which is enough to keep the blob
//! edge smooth.

use crate::path::BlobPath;
use crate::surface::DrawingSurface;
use image::{Rgba, RgbaImage};
use std::path::Path;
use wobble_core::{Color, Result, Vec2, WobbleError};

const SUBSAMPLES: usize = 4;

/// Flattening tolerance in pixels
const FLATTEN_TOLERANCE: f64 = 2.0;

pub struct RasterSurface {
    image: RgbaImage,
    background: Color,
    available: bool,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::TRANSPARENT)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        let mut surface = Self {
            image: RgbaImage::new(width, height),
            background,
            available: true,
        };
        surface.clear();
        surface
    }

    /// Reallocate the canvas. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.image.dimensions() != (width, height) {
            self.image = RgbaImage::new(width, height);
            self.clear();
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Number of pixels with any coverage (alpha > 0)
    pub fn covered_pixels(&self) -> usize {
        self.image.pixels().filter(|p| p.0[3] > 0).count()
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| WobbleError::ImageError(e.to_string()))
    }

    fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let src = color.to_array();
        let dst = self.image.get_pixel(x, y).0;
        let mut out = [0u8; 4];
        for c in 0..3 {
            let d = dst[c] as f32 / 255.0;
            let v = src[c].clamp(0.0, 1.0) * alpha + d * (1.0 - alpha);
            out[c] = (v * 255.0).round() as u8;
        }
        let da = dst[3] as f32 / 255.0;
        out[3] = ((alpha + da * (1.0 - alpha)) * 255.0).round() as u8;
        self.image.put_pixel(x, y, Rgba(out));
    }
}

impl DrawingSurface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn clear(&mut self) {
        let bg = Rgba(self.background.to_rgba8());
        for pixel in self.image.pixels_mut() {
            *pixel = bg;
        }
    }

    fn fill_path(&mut self, path: &BlobPath, color: Color) {
        let polygon = path.flatten(FLATTEN_TOLERANCE);
        let (width, height) = self.image.dimensions();
        if polygon.len() < 3 || width == 0 || height == 0 {
            return;
        }

        let (min_y, max_y) = polygon
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        if !min_y.is_finite() || !max_y.is_finite() {
            return;
        }
        let row_start = min_y.floor().max(0.0) as u32;
        let row_end = (max_y.ceil().max(0.0) as u32).min(height);

        let edges: Vec<(Vec2, Vec2)> = (0..polygon.len())
            .map(|i| (polygon[i], polygon[(i + 1) % polygon.len()]))
            .filter(|(a, b)| a.y != b.y)
            .collect();

        let mut coverage = vec![0.0f32; width as usize];
        let mut crossings: Vec<(f64, i32)> = Vec::new();
        let weight = 1.0 / SUBSAMPLES as f32;

        for row in row_start..row_end {
            coverage.iter_mut().for_each(|c| *c = 0.0);

            for sub in 0..SUBSAMPLES {
                let sy = row as f64 + (sub as f64 + 0.5) / SUBSAMPLES as f64;
                crossings.clear();
                for (a, b) in &edges {
                    let (top, bottom) = if a.y < b.y { (a, b) } else { (b, a) };
                    if sy >= top.y && sy < bottom.y {
                        let x = a.x + (sy - a.y) * (b.x - a.x) / (b.y - a.y);
                        let dir = if b.y > a.y { 1 } else { -1 };
                        crossings.push((x, dir));
                    }
                }
                crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

                let mut winding = 0;
                for pair in crossings.windows(2) {
                    winding += pair[0].1;
                    if winding != 0 {
                        accumulate_span(&mut coverage, pair[0].0, pair[1].0, weight);
                    }
                }
            }

            for (x, &c) in coverage.iter().enumerate() {
                if c > 0.0 {
                    self.blend(x as u32, row, color, c.min(1.0));
                }
            }
        }
    }
}

/// Add horizontal coverage for the span `[x0, x1)` to a row buffer
fn accumulate_span(coverage: &mut [f32], x0: f64, x1: f64, weight: f32) {
    let width = coverage.len() as f64;
    let x0 = x0.clamp(0.0, width);
    let x1 = x1.clamp(0.0, width);
    if x1 <= x0 {
        return;
    }
    let first = x0.floor() as usize;
    let last = (x1.ceil() as usize).min(coverage.len());
    for (px, cell) in coverage.iter_mut().enumerate().take(last).skip(first) {
        let left = (px as f64).max(x0);
        let right = ((px + 1) as f64).min(x1);
        if right > left {
            *cell += (right - left) as f32 * weight;
        }
    }
}
