//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use sdl_lessons::graphics::font::{FontError, TextRasterizer};
use sdl_lessons::graphics::{Color, Pixmap};

/// Write a solid `width` x `height` image to `dir/name`. The format follows
/// the extension.
pub fn write_image(dir: &Path, name: &str, width: u32, height: u32, color: Color) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([color.r, color.g, color.b, color.a]))
        .save(&path)
        .unwrap();
    path
}

/// Like [`write_image`] but stored without an alpha channel.
pub fn write_rgb_image(dir: &Path, name: &str, width: u32, height: u32, color: Color) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([color.r, color.g, color.b]))
        .save(&path)
        .unwrap();
    path
}

/// Rasterizer drawing each character as an 8x16 block of solid color.
pub struct BlockFont;

pub const GLYPH_WIDTH: u32 = 8;
pub const GLYPH_HEIGHT: u32 = 16;

impl TextRasterizer for BlockFont {
    fn render_solid(&self, text: &str, color: Color) -> Result<Pixmap, FontError> {
        if text.is_empty() {
            return Err(FontError::EmptyText);
        }
        let width = text.chars().count() as u32 * GLYPH_WIDTH;
        Pixmap::filled(width, GLYPH_HEIGHT, color)
            .map_err(|e| FontError::RenderFailed(e.to_string()))
    }
}
