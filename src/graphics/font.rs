//! Text rasterization interface.
//!
//! A [`TextRasterizer`] turns a string into a [`Pixmap`] using one opened font
//! at one point size. The SDL_ttf implementation lives in
//! [`crate::graphics::sdl::ttf`]; tests supply their own.

use crate::graphics::common::Color;
use crate::graphics::pixmap::Pixmap;

/// Errors that can occur during font operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontError {
    /// The font file could not be opened.
    #[error("Unable to open font {path}: {reason}")]
    OpenFailed { path: String, reason: String },

    /// Nothing to render.
    #[error("Text is empty")]
    EmptyText,

    /// The rasterizer rejected the string.
    #[error("Text rendering failed: {0}")]
    RenderFailed(String),
}

/// Renders strings into pixel buffers.
pub trait TextRasterizer {
    /// Render `text` with a solid foreground `color` on a transparent
    /// background.
    fn render_solid(&self, text: &str, color: Color) -> Result<Pixmap, FontError>;
}
