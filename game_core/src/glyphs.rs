//! 3x5 pixel glyphs for the few characters the game displays

use glam::IVec2;
use tracing::debug;

use crate::canvas::{Canvas, Color};

pub const GLYPH_HEIGHT: i32 = 5;
const GLYPH_SPACING: i32 = 1;

/// Rows top to bottom, bit 2 is the leftmost column
fn glyph(c: char) -> Option<(i32, [u8; 5])> {
    let rows = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b001, 0b001, 0b001, 0b001, 0b001],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        ':' => return Some((1, [0b0, 0b1, 0b0, 0b1, 0b0])),
        _ => return None,
    };
    Some((3, rows))
}

/// Width in pixels of `text`, including the gaps between glyphs
pub fn text_width(text: &str) -> i32 {
    let widths: Vec<i32> = text
        .chars()
        .map(|c| glyph(c).map_or(3, |(w, _)| w))
        .collect();
    let gaps = widths.len().saturating_sub(1) as i32 * GLYPH_SPACING;
    widths.iter().sum::<i32>() + gaps
}

/// Draw `text` with its top-left corner at `origin`. Unknown characters
/// leave a blank cell.
pub fn draw_text(canvas: &mut dyn Canvas, text: &str, origin: IVec2, color: Color) {
    let mut x = origin.x;
    for c in text.chars() {
        let Some((width, rows)) = glyph(c) else {
            debug!(?c, "no glyph");
            x += 3 + GLYPH_SPACING;
            continue;
        };
        for (dy, row) in rows.iter().enumerate() {
            for dx in 0..width {
                if (row >> (width - 1 - dx)) & 1 == 1 {
                    canvas.draw_dot(IVec2::new(x + dx, origin.y + dy as i32), color);
                }
            }
        }
        x += width + GLYPH_SPACING;
    }
}

/// Draw `text` centred on `center`
pub fn draw_text_centered(canvas: &mut dyn Canvas, text: &str, center: IVec2, color: Color) {
    let origin = center - IVec2::new(text_width(text) / 2, GLYPH_HEIGHT / 2);
    draw_text(canvas, text, origin, color);
}
