//! A tiny 5x7 bitmap font covering what hex labels need.

use image::{Pixel, Rgba, RgbaImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between two glyphs, before scaling.
const SPACING: u32 = 1;

/// Rows top to bottom, the leftmost pixel in bit 4.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        _ => return None,
    };

    Some(rows)
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;

    if count == 0 {
        return 0;
    }

    (count * GLYPH_WIDTH + (count - 1) * SPACING) * scale
}

/// Draws `text` with its top-left corner at `(x, y)`, alpha-blending `color`
/// over the image. Pixels outside the image are skipped, and characters
/// without a glyph leave a gap.
pub fn draw_text(image: &mut RgbaImage, text: &str, x: i64, y: i64, scale: u32, color: Rgba<u8>) {
    let advance = i64::from((GLYPH_WIDTH + SPACING) * scale);
    let scale = i64::from(scale);

    for (n, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let left = x + n as i64 * advance;

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }

                let px = left + i64::from(col) * scale;
                let py = y + row as i64 * scale;
                fill_square(image, px, py, scale, color);
            }
        }
    }
}

fn fill_square(image: &mut RgbaImage, x: i64, y: i64, size: i64, color: Rgba<u8>) {
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));

    for py in y.max(0)..(y + size).min(height) {
        for px in x.max(0)..(x + size).min(width) {
            image.get_pixel_mut(px as u32, py as u32).blend(&color);
        }
    }
}
