//! SDL_ttf font loading.
//!
//! [`TtfContext`] must outlive every [`TtfFont`] opened from it; the borrow
//! checker enforces this through the `'ttf` lifetime.

use std::path::Path;

use sdl2::pixels::Color as SdlColor;
use sdl2::surface::Surface;
use sdl2::ttf::{Font, Sdl2TtfContext};

use crate::graphics::common::Color;
use crate::graphics::font::{FontError, TextRasterizer};
use crate::graphics::pixmap::{Pixmap, BYTES_PER_PIXEL};
use crate::graphics::sdl::RGBA_PIXEL_FORMAT;

/// Initialized SDL_ttf library.
pub struct TtfContext {
    inner: Sdl2TtfContext,
}

impl TtfContext {
    pub fn init() -> Result<Self, FontError> {
        let inner = sdl2::ttf::init().map_err(|e| FontError::OpenFailed {
            path: "<SDL_ttf>".to_string(),
            reason: e.to_string(),
        })?;
        log::info!("SDL_ttf initialized");
        Ok(Self { inner })
    }

    /// Open a font file at `point_size`.
    pub fn open_font(
        &self,
        path: impl AsRef<Path>,
        point_size: u16,
    ) -> Result<TtfFont<'_>, FontError> {
        let path = path.as_ref();
        let font = self
            .inner
            .load_font(path, point_size)
            .map_err(|reason| FontError::OpenFailed {
                path: path.display().to_string(),
                reason,
            })?;
        log::info!("Opened font {} at {}pt", path.display(), point_size);
        Ok(TtfFont { font })
    }
}

/// An opened TrueType font.
pub struct TtfFont<'ttf> {
    font: Font<'ttf, 'static>,
}

impl TextRasterizer for TtfFont<'_> {
    fn render_solid(&self, text: &str, color: Color) -> Result<Pixmap, FontError> {
        if text.is_empty() {
            return Err(FontError::EmptyText);
        }

        let surface = self
            .font
            .render(text)
            .solid(SdlColor::RGBA(color.r, color.g, color.b, color.a))
            .map_err(|e| FontError::RenderFailed(e.to_string()))?;

        // Solid text is 8-bit paletted with a color key; converting to RGBA
        // turns the key into alpha.
        let surface = surface
            .convert_format(RGBA_PIXEL_FORMAT)
            .map_err(FontError::RenderFailed)?;

        surface_to_pixmap(&surface)
    }
}

fn surface_to_pixmap(surface: &Surface<'_>) -> Result<Pixmap, FontError> {
    let width = surface.width();
    let height = surface.height();
    let pitch = surface.pitch() as usize;
    let row_len = width as usize * BYTES_PER_PIXEL;

    let mut data = Vec::with_capacity(row_len * height as usize);
    surface.with_lock(|pixels| {
        for row in pixels.chunks(pitch).take(height as usize) {
            data.extend_from_slice(&row[..row_len]);
        }
    });

    Pixmap::from_rgba(width, height, data).map_err(|e| FontError::RenderFailed(e.to_string()))
}
