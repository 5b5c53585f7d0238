//! Viewport
//!
//! Logical window dimensions and the derived ground line. World
//! coordinates are y-up with the origin at the bottom-left corner;
//! the renderer flips to screen space when drawing.

/// Window dimensions at startup
pub const INITIAL_WIDTH: f32 = 800.0;
pub const INITIAL_HEIGHT: f32 = 480.0;

/// The window manager may report smaller sizes during a drag-resize;
/// the playfield never shrinks below this.
pub const MIN_WIDTH: f32 = 640.0;
pub const MIN_HEIGHT: f32 = 360.0;

/// Ground sits at this fraction of the viewport height
pub const GROUND_FRACTION: f32 = 0.10;

/// Logical playfield dimensions, clamped to the minimum window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            height: height.max(MIN_HEIGHT),
        }
    }

    /// Y coordinate of the ground line (world space, y-up)
    pub fn ground_y(&self) -> f32 {
        GROUND_FRACTION * self.height
    }
}
