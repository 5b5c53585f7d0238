//! Basic UI widgets

use macroquad::prelude::*;
use super::{MouseState, Rect};

/// Draw a filled button with a centered label, returns true if clicked
pub fn text_button(rect: Rect, label: &str, font_size: f32, base: Color, mouse: &MouseState) -> bool {
    let hovered = mouse.inside(&rect);
    let pressed = mouse.clicking(&rect);
    let clicked = mouse.clicked(&rect);

    let bg = if pressed {
        shade(base, 0.75)
    } else if hovered {
        shade(base, 1.25)
    } else {
        base
    };
    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 6.0, bg);
    draw_text_centered(label, rect.center_x(), rect.center_y(), font_size, WHITE);

    clicked
}

/// Draw text centered on a point
pub fn draw_text_centered(text: &str, cx: f32, cy: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let x = (cx - dims.width * 0.5).round();
    let y = (cy + dims.height * 0.5).round();
    draw_text(text, x, y, font_size, color);
}

/// Scale a color's channels, clamped to the displayable range
fn shade(c: Color, factor: f32) -> Color {
    Color::new(
        (c.r * factor).min(1.0),
        (c.g * factor).min(1.0),
        (c.b * factor).min(1.0),
        c.a,
    )
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}
