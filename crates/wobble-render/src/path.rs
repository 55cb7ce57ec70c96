//! Closed smooth path through the ring of point positions
//!
//! The path starts halfway between the last and first points. Every point
//! then acts as the control vertex of one quadratic segment that ends halfway
//! to the next point, so the final segment lands back on the start.

use wobble_core::{Color, Vec2};

/// One drawing command of a blob outline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    QuadTo { control: Vec2, end: Vec2 },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlobPath {
    segments: Vec<PathSegment>,
}

impl BlobPath {
    /// Build the outline from ring positions. Fewer than two points produce
    /// an empty path.
    pub fn from_ring(points: &[Vec2]) -> Self {
        let n = points.len();
        if n < 2 {
            return Self::default();
        }

        let mut segments = Vec::with_capacity(n + 2);
        segments.push(PathSegment::MoveTo(points[n - 1].midpoint(&points[0])));
        for i in 0..n {
            let control = points[i];
            let next = points[(i + 1) % n];
            segments.push(PathSegment::QuadTo {
                control,
                end: control.midpoint(&next),
            });
        }
        segments.push(PathSegment::Close);
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn start(&self) -> Option<Vec2> {
        match self.segments.first() {
            Some(PathSegment::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Pen position after the last drawing segment
    pub fn end(&self) -> Option<Vec2> {
        self.segments.iter().rev().find_map(|s| match s {
            PathSegment::MoveTo(p) => Some(*p),
            PathSegment::QuadTo { end, .. } => Some(*end),
            PathSegment::Close => None,
        })
    }

    /// Number of quadratic segments
    pub fn curve_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::QuadTo { .. }))
            .count()
    }

    /// Approximate the outline with a polygon. Each quadratic is split so no
    /// chord exceeds roughly `tolerance` pixels of control-polygon length.
    pub fn flatten(&self, tolerance: f64) -> Vec<Vec2> {
        let tolerance = if tolerance > 0.0 { tolerance } else { 1.0 };
        let mut polygon = Vec::new();
        let mut pen = Vec2::ZERO;

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    pen = p;
                    polygon.push(p);
                }
                PathSegment::QuadTo { control, end } => {
                    let hull = pen.distance(&control) + control.distance(&end);
                    let steps = ((hull / tolerance).ceil() as usize).clamp(1, 64);
                    for step in 1..=steps {
                        let t = step as f64 / steps as f64;
                        polygon.push(quadratic_point(pen, control, end, t));
                    }
                    pen = end;
                }
                PathSegment::Close => {}
            }
        }
        polygon
    }

    /// Axis-aligned bounds of the control polygon, `(min, max)`
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.segments.iter().flat_map(|s| match *s {
            PathSegment::MoveTo(p) => vec![p],
            PathSegment::QuadTo { control, end } => vec![control, end],
            PathSegment::Close => Vec::new(),
        });
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| {
            (
                Vec2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vec2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// SVG `d` attribute for this path
    pub fn to_svg_path_data(&self) -> String {
        let mut d = String::new();
        for segment in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            match segment {
                PathSegment::MoveTo(p) => d.push_str(&format!("M{:.2},{:.2}", p.x, p.y)),
                PathSegment::QuadTo { control, end } => d.push_str(&format!(
                    "Q{:.2},{:.2} {:.2},{:.2}",
                    control.x, control.y, end.x, end.y
                )),
                PathSegment::Close => d.push('Z'),
            }
        }
        d
    }
}

fn quadratic_point(p0: Vec2, p1: Vec2, p2: Vec2, t: f64) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Standalone SVG document with the path filled in `color`
pub fn svg_document(path: &BlobPath, width: u32, height: u32, color: Color) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
         <path d=\"{d}\" fill=\"{fill}\"/></svg>",
        w = width,
        h = height,
        d = path.to_svg_path_data(),
        fill = color.to_hex_string(),
    )
}
