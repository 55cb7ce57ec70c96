//! Events produced by a blob engine

use wobble_core::Color;

/// Something observable that happened while driving a blob
#[derive(Clone, Debug, PartialEq)]
pub enum BlobEvent {
    /// Engine state was (re)built by `init`
    Initialized { point_count: usize },
    /// Pointer crossed into the blob and pushed a ring point
    PointerEntered { point: usize, impulse: f64 },
    /// Pointer left the blob; fill snaps back to the base color
    PointerExited { point: usize, impulse: f64 },
    /// Color animation moved on to the next palette entry
    PaletteAdvanced { index: usize },
    /// Base color changed by the host
    BaseColorChanged(Color),
    /// Surface size changed
    Resized { width: u32, height: u32 },
    /// First tick whose frame could not be drawn
    RenderingPaused { tick: u64 },
    /// Drawing works again after `skipped` undrawn frames
    RenderingResumed { tick: u64, skipped: u64 },
}
