//! Wobble Render - turns the point ring into a filled shape
//!
//! - `BlobPath` - closed midpoint/quadratic path through the ring
//! - `DrawingSurface` - host-owned target the renderer fills into
//! - `PathRecorder` - surface that only records what was drawn
//! - `RasterSurface` - CPU canvas backed by an `image::RgbaImage`
//! - `CurveRenderer` - glue that builds the path and fills it

pub mod path;
pub mod raster;
pub mod renderer;
pub mod surface;

pub use path::{svg_document, BlobPath, PathSegment};
pub use raster::RasterSurface;
pub use renderer::CurveRenderer;
pub use surface::{DrawingSurface, PathRecorder, RecordedFill};
