//! Replays a `DrawList` with macroquad's immediate-mode shapes.

use bridge_engine::{Color, DrawCommand, DrawList, Shape};
use macroquad::color::Color as MqColor;
use macroquad::shapes::{draw_arc, draw_circle, draw_line, draw_rectangle};
use macroquad::text::{draw_text_ex, measure_text, TextParams};
use macroquad::window::clear_background;

use crate::fonts::FontBook;

const ARC_SIDES: u8 = 32;

fn to_mq(c: Color) -> MqColor {
    MqColor::from_rgba(c.r, c.g, c.b, c.a)
}

/// Clear to the list's background and draw every command in order.
/// The list must already be finished (sorted back to front).
pub fn present(list: &DrawList, fonts: &FontBook) {
    clear_background(to_mq(list.clear_color));
    for cmd in list.commands() {
        draw_command(cmd, fonts);
    }
}

fn draw_command(cmd: &DrawCommand, fonts: &FontBook) {
    let color = to_mq(cmd.color);
    match &cmd.shape {
        Shape::Rect { pos, size, corner_radius } => {
            draw_rounded_rect(pos.x, pos.y, size.x, size.y, *corner_radius, color);
        }
        Shape::Line { from, to, thickness } => {
            draw_line(from.x, from.y, to.x, to.y, *thickness, color);
        }
        Shape::Circle { center, radius } => {
            draw_circle(center.x, center.y, *radius, color);
        }
        Shape::Arc { center, radius, start, sweep, thickness } => {
            draw_arc(
                center.x,
                center.y,
                ARC_SIDES,
                *radius,
                start.to_degrees(),
                *thickness,
                sweep.to_degrees(),
                color,
            );
        }
        Shape::Text { text, pos, size, font } => {
            let font = fonts.get(font.as_deref());
            let font_size = size.round().clamp(1.0, u16::MAX as f32) as u16;
            // Commands anchor text at its top-left; macroquad anchors at the baseline.
            let dims = measure_text(text, font, font_size, 1.0);
            draw_text_ex(
                text,
                pos.x,
                pos.y + dims.offset_y,
                TextParams {
                    font,
                    font_size,
                    color,
                    ..Default::default()
                },
            );
        }
    }
}

fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32, color: MqColor) {
    let r = radius.min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        draw_rectangle(x, y, w, h, color);
        return;
    }
    draw_rectangle(x + r, y, w - 2.0 * r, h, color);
    draw_rectangle(x, y + r, w, h - 2.0 * r, color);
    for (cx, cy) in [
        (x + r, y + r),
        (x + w - r, y + r),
        (x + r, y + h - r),
        (x + w - r, y + h - r),
    ] {
        draw_circle(cx, cy, r, color);
    }
}
