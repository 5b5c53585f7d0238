//! Immediate-mode UI helpers for the menu and game-over screens
//!
//! Design principles:
//! - Immediate mode (no retained state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod input;
mod rect;
mod widgets;

pub use input::*;
pub use rect::*;
pub use widgets::*;
