//! Game Logic
//!
//! Everything that happens inside a run, independent of windowing,
//! input devices and rendering.
//!
//! Key concepts:
//! - Entities: plain data structs with their own movement rules
//! - Collision: a forgiving inset AABB test between entity pairs
//! - Session: one run's state, advanced one tick at a time
//!
//! Nothing in here calls into macroquad, which is what keeps the whole
//! module testable off-screen.

pub mod collision;
pub mod entities;
pub mod session;

// Re-export main types
pub use collision::{overlaps, BoundingBox};
pub use entities::{Coin, Explorer, Monkey};
pub use session::{GameSession, TickOutcome};
