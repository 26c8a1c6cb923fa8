//! Overlay drawing on RGB8 frames.
//!
//! Coordinates are signed so shapes may hang off the edge of the frame;
//! everything is clipped to the image bounds.

use {
    crate::*,
    base::Vec2,
    font8x8::{BASIC_FONTS, UnicodeFonts},
};

/// Side of one unscaled glyph cell, in pixels.
pub const GLYPH_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const GREEN: Color = Color([0, 255, 0]);
}

pub fn fill_rect(
    image: &mut Image,
    top_left: Vec2<isize>,
    size: Vec2<usize>,
    color: Color,
) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    let x0 = top_left.x.max(0) as usize;
    let y0 = top_left.y.max(0) as usize;
    let x1 = (top_left.x + size.x as isize).clamp(0, image.size.x as isize) as usize;
    let y1 = (top_left.y + size.y as isize).clamp(0, image.size.y as isize) as usize;
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, color);
        }
    }
    Ok(())
}

/// Draw a circle outline `thickness` pixels wide, centered on the radius.
pub fn draw_ring(
    image: &mut Image,
    center: Vec2<isize>,
    radius: usize,
    thickness: usize,
    color: Color,
) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    let half = thickness.max(1) as f32 / 2.0;
    let reach = radius as isize + half.ceil() as isize;

    let y0 = (center.y - reach).max(0);
    let y1 = (center.y + reach).min(image.size.y as isize - 1);
    let x0 = (center.x - reach).max(0);
    let x1 = (center.x + reach).min(image.size.x as isize - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = (x - center.x) as f32;
            let dy = (y - center.y) as f32;
            let distance = (dx * dx + dy * dy).sqrt();
            if (distance - radius as f32).abs() <= half {
                image.put_pixel(x as usize, y as usize, color);
            }
        }
    }
    Ok(())
}

/// Pixel size of `text` rendered at `scale`.
pub fn text_size(text: &str, scale: usize) -> Vec2<usize> {
    Vec2::new(
        text.chars().count() * GLYPH_SIZE * scale,
        GLYPH_SIZE * scale,
    )
}

/// Draw `text` with its top-left corner at `origin`.
///
/// Characters outside the basic 8x8 font leave a blank cell.
pub fn draw_text(
    image: &mut Image,
    text: &str,
    origin: Vec2<isize>,
    scale: usize,
    color: Color,
) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    let scale = scale.max(1);
    let cell = (GLYPH_SIZE * scale) as isize;
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let cell_x = origin.x + i as isize * cell;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let top_left = Vec2::new(
                    cell_x + (col * scale) as isize,
                    origin.y + (row * scale) as isize,
                );
                fill_rect(image, top_left, Vec2::new(scale, scale), color)?;
            }
        }
    }
    Ok(())
}

/// Draw `text` centered on `center`.
pub fn draw_text_centered(
    image: &mut Image,
    text: &str,
    center: Vec2<isize>,
    scale: usize,
    color: Color,
) -> Result<(), ImageError> {
    let size = text_size(text, scale.max(1));
    let origin = Vec2::new(
        center.x - (size.x / 2) as isize,
        center.y - (size.y / 2) as isize,
    );
    draw_text(image, text, origin, scale, color)
}
