//! Input Events
//!
//! Translates raw keyboard state into the handful of game events the
//! app understands, so game logic never sees key codes.
//!
//! Bindings:
//! - Space or Up = jump
//! - Left / Right arrows = walk (held)

use macroquad::prelude::*;

/// Everything the keyboard can ask of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    JumpPressed,
    MoveLeftDown,
    MoveLeftUp,
    MoveRightDown,
    MoveRightUp,
}

/// Poll the keyboard once per frame and collect this frame's events.
/// Edge-triggered: held keys produce one Down and one Up, not a stream.
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Up) {
        events.push(InputEvent::JumpPressed);
    }
    if is_key_pressed(KeyCode::Left) {
        events.push(InputEvent::MoveLeftDown);
    }
    if is_key_released(KeyCode::Left) {
        events.push(InputEvent::MoveLeftUp);
    }
    if is_key_pressed(KeyCode::Right) {
        events.push(InputEvent::MoveRightDown);
    }
    if is_key_released(KeyCode::Right) {
        events.push(InputEvent::MoveRightUp);
    }

    events
}
