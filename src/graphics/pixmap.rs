//! Pixmap and pixel data management
//!
//! A [`Pixmap`] is a decoded image sitting in CPU memory, always stored as
//! tightly packed RGBA8 rows. It is the intermediate buffer between the image
//! decoder (or the text rasterizer) and the GPU upload done by a driver.
//!
//! Key concepts:
//! - Decoding: any format the `image` crate understands (PNG, BMP, ...)
//! - Color keying: pixels matching a key color lose their alpha
//! - Upload: drivers consume [`Pixmap::data`] with [`Pixmap::pitch`]

use std::path::Path;

use crate::graphics::common::Color;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors related to pixmap operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PixmapError {
    #[error("Invalid pixmap dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Unable to decode image {path}: {reason}")]
    Decode { path: String, reason: String },
}

/// Decoded RGBA8 pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
    /// Raw pixel data (row-major, RGBA)
    data: Vec<u8>,
    /// Whether the source format stored alpha. Buffers built in memory do.
    alpha_channel: bool,
}

impl Pixmap {
    /// Create a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Result<Self, PixmapError> {
        Self::filled(width, height, Color::new(0, 0, 0, 0))
    }

    /// Create a pixmap where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, PixmapError> {
        let len = Self::byte_len(width, height)?;
        let data = [color.r, color.g, color.b, color.a]
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect();
        Ok(Self {
            width,
            height,
            data,
            alpha_channel: true,
        })
    }

    /// Wrap an existing RGBA8 buffer.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PixmapError> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(PixmapError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
            alpha_channel: true,
        })
    }

    /// Decode an image file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PixmapError> {
        let path = path.as_ref();
        let decode_error = |reason: String| PixmapError::Decode {
            path: path.display().to_string(),
            reason,
        };

        let image = image::open(path).map_err(|e| decode_error(e.to_string()))?;
        let alpha_channel = image.color().has_alpha();
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!(
            "Decoded {} ({}x{}, alpha: {})",
            path.display(),
            width,
            height,
            alpha_channel
        );

        let mut pixmap = Self::from_rgba(width, height, rgba.into_raw())
            .map_err(|e| decode_error(e.to_string()))?;
        pixmap.alpha_channel = alpha_channel;
        Ok(pixmap)
    }

    fn byte_len(width: u32, height: u32) -> Result<usize, PixmapError> {
        if width == 0 || height == 0 {
            return Err(PixmapError::InvalidDimensions { width, height });
        }
        Ok(width as usize * height as usize * BYTES_PER_PIXEL)
    }

    /// Get width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.pitch() + x as usize * BYTES_PER_PIXEL)
    }

    /// Read one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let px = &self.data[offset..offset + BYTES_PER_PIXEL];
        Some(Color::new(px[0], px[1], px[2], px[3]))
    }

    /// Write one pixel. Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.offset(x, y) {
            Some(offset) => {
                self.data[offset..offset + BYTES_PER_PIXEL]
                    .copy_from_slice(&[color.r, color.g, color.b, color.a]);
                true
            }
            None => false,
        }
    }

    /// Make every pixel whose RGB equals `key` fully transparent.
    ///
    /// Returns the number of pixels that were keyed out.
    pub fn apply_color_key(&mut self, key: Color) -> usize {
        let mut keyed = 0;
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            if key.same_rgb(&Color::new(px[0], px[1], px[2], px[3])) {
                px[3] = 0;
                keyed += 1;
            }
        }
        keyed
    }

    /// Whether the decoded source carried its own alpha channel.
    pub fn has_alpha_channel(&self) -> bool {
        self.alpha_channel
    }
}
