//! Mouse state for UI interaction

use macroquad::prelude::{is_mouse_button_down, is_mouse_button_pressed, mouse_position, MouseButton};

use super::Rect;

/// Mouse button state, sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Sample the current mouse state from the window
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is clicking inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_requires_press_inside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let mouse = MouseState {
            x: 50.0,
            y: 20.0,
            left_down: true,
            left_pressed: true,
        };
        assert!(mouse.inside(&rect));
        assert!(mouse.clicked(&rect));

        let outside = MouseState {
            x: 150.0,
            ..mouse
        };
        assert!(!outside.clicked(&rect));

        let held = MouseState {
            left_pressed: false,
            ..mouse
        };
        assert!(held.clicking(&rect));
        assert!(!held.clicked(&rect));
    }
}
