//! Drawing surface abstraction

use crate::path::BlobPath;
use wobble_core::Color;

/// A host-owned target the blob is drawn onto.
///
/// The renderer only borrows a surface for the duration of one frame. The
/// host may resize it between frames or mark it unavailable (e.g. while a
/// view is detached); the renderer then skips drawing.
pub trait DrawingSurface {
    /// Current size in pixels
    fn size(&self) -> (u32, u32);

    /// Whether the surface can be drawn to right now
    fn is_available(&self) -> bool {
        true
    }

    /// Wipe the previous frame
    fn clear(&mut self);

    /// Fill the closed path with a solid color
    fn fill_path(&mut self, path: &BlobPath, color: Color);
}

/// A single fill captured by `PathRecorder`
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFill {
    pub path: BlobPath,
    pub color: Color,
}

/// Surface that keeps the fills of the current frame instead of drawing them
#[derive(Clone, Debug, Default)]
pub struct PathRecorder {
    width: u32,
    height: u32,
    available: bool,
    fills: Vec<RecordedFill>,
    clears: usize,
}

impl PathRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            available: true,
            fills: Vec::new(),
            clears: 0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Fills since the last clear
    pub fn fills(&self) -> &[RecordedFill] {
        &self.fills
    }

    pub fn last_fill(&self) -> Option<&RecordedFill> {
        self.fills.last()
    }

    /// How many frames have been started on this surface
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl DrawingSurface for PathRecorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn clear(&mut self) {
        self.fills.clear();
        self.clears += 1;
    }

    fn fill_path(&mut self, path: &BlobPath, color: Color) {
        self.fills.push(RecordedFill {
            path: path.clone(),
            color,
        });
    }
}
