//! Collision
//!
//! Inset AABB overlap test. Both boxes shrink by a fixed margin before
//! the comparison, so sprite-edge grazes and near misses don't register
//! as hits. All comparisons are strict: shrunken boxes that merely
//! touch do not overlap.

/// Margin trimmed from every side of both boxes before testing
pub const COLLISION_INSET: f32 = 20.0;

/// Axis-aligned bounding box in world space (y-up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Inset overlap test between two boxes.
///
/// Overlaps shallower than twice the inset on either axis are ignored,
/// which is what makes close calls feel fair in play.
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    let inset = COLLISION_INSET;
    a.x + a.w - inset > b.x + inset
        && a.x + inset < b.x + b.w - inset
        && a.y + a.h - inset > b.y + inset
        && a.y + inset < b.y + b.h - inset
}
