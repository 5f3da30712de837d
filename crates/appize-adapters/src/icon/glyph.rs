//! Block-glyph rendering for the fallback launcher icon.
//!
//! The generated icon carries an "APP" label. There is no font stack in
//! this crate, so the letters are tiny 5x7 bitmaps scaled up with hard
//! edges, which reads fine at launcher sizes.

use image::{Rgba, RgbaImage};

/// 5 columns x 7 rows, one bitmask row per entry, MSB is the left column.
type Glyph = [u8; 7];

const GLYPH_A: Glyph = [
    0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
];

const GLYPH_P: Glyph = [
    0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000,
];

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
const GLYPH_GAP: u32 = 1;

/// Draw "APP" centered on `canvas`, sized to roughly 60% of its width.
pub(crate) fn draw_app_label(canvas: &mut RgbaImage, color: Rgba<u8>) {
    let glyphs = [GLYPH_A, GLYPH_P, GLYPH_P];
    let text_cols = glyphs.len() as u32 * GLYPH_COLS + (glyphs.len() as u32 - 1) * GLYPH_GAP;

    let scale = (canvas.width() * 6 / 10 / text_cols).max(1);
    let text_width = text_cols * scale;
    let text_height = GLYPH_ROWS * scale;
    let origin_x = canvas.width().saturating_sub(text_width) / 2;
    let origin_y = canvas.height().saturating_sub(text_height) / 2;

    for (index, glyph) in glyphs.iter().enumerate() {
        let glyph_x = origin_x + index as u32 * (GLYPH_COLS + GLYPH_GAP) * scale;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                    continue;
                }
                fill_block(
                    canvas,
                    glyph_x + col * scale,
                    origin_y + row as u32 * scale,
                    scale,
                    color,
                );
            }
        }
    }
}

fn fill_block(canvas: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            let px = x + dx;
            let py = y + dy;
            if px < canvas.width() && py < canvas.height() {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}
