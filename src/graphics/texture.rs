//! Texture resource wrapper.
//!
//! [`Texture`] owns one GPU texture handle together with its size and the
//! modulation state (color, alpha, blend mode) applied when it is drawn. The
//! pixels themselves live in the driver; the wrapper only remembers the
//! handle, so every operation takes the driver as an explicit argument.
//!
//! States are simply *empty* (no handle, `0x0`) and *loaded*. Every load frees
//! the previous texture first, and a failed load leaves the wrapper empty.

use std::path::Path;

use crate::graphics::common::{
    BlendMode, Color, CopyRequest, DriverError, DriverResult, Flip, GraphicsDriver, Point, Rect,
    TextureHandle,
};
use crate::graphics::font::{FontError, TextRasterizer};
use crate::graphics::pixmap::{Pixmap, PixmapError};

/// Errors returned by texture operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextureError {
    /// The file could not be read or decoded.
    #[error(transparent)]
    Decode(#[from] PixmapError),

    /// The driver rejected the upload or a modulation call.
    #[error("Texture could not be created: {0}")]
    Upload(#[from] DriverError),

    /// The text could not be rasterized.
    #[error("Text could not be rendered: {0}")]
    Font(#[from] FontError),

    /// Draw requested on an empty texture.
    #[error("Texture is not loaded")]
    NotLoaded,
}

pub type TextureResult<T> = Result<T, TextureError>;

/// Optional parameters of a draw call.
///
/// Defaults: whole texture, no rotation, pivot at the center of the
/// destination quad, no flip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderOptions {
    /// Source sub-rectangle (sprite-sheet cell).
    pub clip: Option<Rect>,
    /// Clockwise rotation in degrees.
    pub angle: f64,
    /// Rotation pivot relative to the destination quad.
    pub center: Option<Point>,
    pub flip: Flip,
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    #[must_use]
    pub fn with_flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }
}

/// A GPU texture plus the parameters it is drawn with.
#[derive(Debug)]
pub struct Texture {
    handle: Option<TextureHandle>,
    width: u32,
    height: u32,
    color_mod: Color,
    alpha_mod: u8,
    /// Explicit blend mode; `None` picks one from the pixel source.
    blend_mode: Option<BlendMode>,
}

impl Default for Texture {
    fn default() -> Self {
        Self::new()
    }
}

impl Texture {
    /// Create an empty texture.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handle: None,
            width: 0,
            height: 0,
            color_mod: Color::WHITE,
            alpha_mod: u8::MAX,
            blend_mode: None,
        }
    }

    /// Load an image file, treating cyan `(0, 255, 255)` as transparent.
    pub fn load_from_file(
        &mut self,
        driver: &mut dyn GraphicsDriver,
        path: impl AsRef<Path>,
    ) -> TextureResult<()> {
        self.load_from_file_keyed(driver, path, Some(Color::CYAN))
    }

    /// Load an image file with an explicit color key, or none at all.
    pub fn load_from_file_keyed(
        &mut self,
        driver: &mut dyn GraphicsDriver,
        path: impl AsRef<Path>,
        color_key: Option<Color>,
    ) -> TextureResult<()> {
        self.free(driver);

        let path = path.as_ref();
        let mut pixmap = Pixmap::load(path)?;
        if let Some(key) = color_key {
            let keyed = pixmap.apply_color_key(key);
            log::debug!("{}: {} pixels keyed out", path.display(), keyed);
        }

        let alpha_capable = color_key.is_some() || pixmap.has_alpha_channel();
        self.upload(driver, &pixmap, alpha_capable)
    }

    /// Upload an already decoded pixel buffer as-is.
    pub fn load_from_pixmap(
        &mut self,
        driver: &mut dyn GraphicsDriver,
        pixmap: &Pixmap,
    ) -> TextureResult<()> {
        self.free(driver);
        self.upload(driver, pixmap, pixmap.has_alpha_channel())
    }

    /// Render `text` with `font` in a solid color. Never color keyed.
    pub fn load_from_rendered_text(
        &mut self,
        driver: &mut dyn GraphicsDriver,
        font: &dyn TextRasterizer,
        text: &str,
        color: Color,
    ) -> TextureResult<()> {
        self.free(driver);

        let pixmap = font.render_solid(text, color)?;
        self.upload(driver, &pixmap, true)
    }

    /// Create the driver texture. Without an explicit blend mode, sources
    /// that can carry alpha blend and the rest draw opaque.
    fn upload(
        &mut self,
        driver: &mut dyn GraphicsDriver,
        pixmap: &Pixmap,
        alpha_capable: bool,
    ) -> TextureResult<()> {
        let handle = driver.create_texture(pixmap)?;

        if let Err(err) = self.apply_modulation(driver, handle, alpha_capable) {
            driver.destroy_texture(handle);
            return Err(err.into());
        }

        self.handle = Some(handle);
        self.width = pixmap.width();
        self.height = pixmap.height();
        Ok(())
    }

    fn apply_modulation(
        &self,
        driver: &mut dyn GraphicsDriver,
        handle: TextureHandle,
        alpha_capable: bool,
    ) -> DriverResult<()> {
        let blend_mode = self.blend_mode.unwrap_or(if alpha_capable {
            BlendMode::Blend
        } else {
            BlendMode::None
        });

        driver.set_texture_blend_mode(handle, blend_mode)?;
        driver.set_texture_color_mod(handle, self.color_mod)?;
        driver.set_texture_alpha_mod(handle, self.alpha_mod)
    }

    /// Release the texture. Safe to call on an empty texture.
    pub fn free(&mut self, driver: &mut dyn GraphicsDriver) {
        if let Some(handle) = self.handle.take() {
            if !driver.destroy_texture(handle) {
                log::warn!("Texture {} was already gone from the driver", handle.id());
            }
        }
        self.width = 0;
        self.height = 0;
    }

    /// Set the RGB multiplier used when drawing.
    pub fn set_color(
        &mut self,
        driver: &mut dyn GraphicsDriver,
        red: u8,
        green: u8,
        blue: u8,
    ) -> TextureResult<()> {
        self.color_mod = Color::rgb(red, green, blue);
        if let Some(handle) = self.handle {
            driver.set_texture_color_mod(handle, self.color_mod)?;
        }
        Ok(())
    }

    /// Set the alpha multiplier used when drawing.
    pub fn set_alpha(&mut self, driver: &mut dyn GraphicsDriver, alpha: u8) -> TextureResult<()> {
        self.alpha_mod = alpha;
        if let Some(handle) = self.handle {
            driver.set_texture_alpha_mod(handle, alpha)?;
        }
        Ok(())
    }

    /// Set the blend mode used when drawing.
    pub fn set_blend_mode(
        &mut self,
        driver: &mut dyn GraphicsDriver,
        mode: BlendMode,
    ) -> TextureResult<()> {
        self.blend_mode = Some(mode);
        if let Some(handle) = self.handle {
            driver.set_texture_blend_mode(handle, mode)?;
        }
        Ok(())
    }

    /// Draw the whole texture at its natural size with the top-left at `(x, y)`.
    pub fn render(&self, driver: &mut dyn GraphicsDriver, x: i32, y: i32) -> TextureResult<()> {
        self.render_ex(driver, x, y, &RenderOptions::default())
    }

    /// Draw with a clip, rotation and flip.
    ///
    /// The destination quad takes the clip's size when a clip is given.
    pub fn render_ex(
        &self,
        driver: &mut dyn GraphicsDriver,
        x: i32,
        y: i32,
        options: &RenderOptions,
    ) -> TextureResult<()> {
        let handle = self.handle.ok_or(TextureError::NotLoaded)?;
        let request = CopyRequest {
            src: options.clip,
            dst: Some(self.destination(x, y, options.clip)),
            angle: options.angle,
            center: options.center,
            flip: options.flip,
        };
        driver.copy_texture(handle, &request)?;
        Ok(())
    }

    /// Draw the whole texture stretched over `dst`, or over the whole
    /// viewport when `dst` is `None`.
    pub fn render_stretched(
        &self,
        driver: &mut dyn GraphicsDriver,
        dst: Option<Rect>,
    ) -> TextureResult<()> {
        let handle = self.handle.ok_or(TextureError::NotLoaded)?;
        driver.copy_texture(handle, &CopyRequest::plain(None, dst))?;
        Ok(())
    }

    /// Destination quad for a draw at `(x, y)`.
    pub fn destination(&self, x: i32, y: i32, clip: Option<Rect>) -> Rect {
        match clip {
            Some(clip) => Rect::new(x, y, clip.w, clip.h),
            None => Rect::new(x, y, self.width, self.height),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<TextureHandle> {
        self.handle
    }

    pub fn color_mod(&self) -> Color {
        self.color_mod
    }

    pub fn alpha_mod(&self) -> u8 {
        self.alpha_mod
    }

    /// Blend mode set by the caller, if any.
    pub fn blend_mode(&self) -> Option<BlendMode> {
        self.blend_mode
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        if let Some(handle) = self.handle {
            log::debug!(
                "Texture {} dropped while loaded; the driver releases it at shutdown",
                handle.id()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::headless::HeadlessDriver;

    fn checker() -> Pixmap {
        let mut pixmap = Pixmap::filled(4, 2, Color::WHITE).unwrap();
        pixmap.set_pixel(0, 0, Color::BLACK);
        pixmap
    }

    #[test]
    fn test_new_texture_is_empty() {
        let texture = Texture::new();
        assert!(!texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (0, 0));
        assert_eq!(texture.color_mod(), Color::WHITE);
        assert_eq!(texture.alpha_mod(), 255);
        assert_eq!(texture.blend_mode(), None);
    }

    #[test]
    fn test_load_from_pixmap_records_size() {
        let mut driver = HeadlessDriver::new(640, 480);
        let mut texture = Texture::new();
        texture.load_from_pixmap(&mut driver, &checker()).unwrap();

        assert!(texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (4, 2));
        assert_eq!(driver.live_textures(), 1);
    }

    #[test]
    fn test_free_is_idempotent() {
        let mut driver = HeadlessDriver::new(640, 480);
        let mut texture = Texture::new();
        texture.free(&mut driver);
        assert_eq!((texture.width(), texture.height()), (0, 0));

        texture.load_from_pixmap(&mut driver, &checker()).unwrap();
        texture.free(&mut driver);
        texture.free(&mut driver);
        assert!(!texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (0, 0));
        assert_eq!(driver.live_textures(), 0);
    }

    #[test]
    fn test_render_empty_texture_fails() {
        let mut driver = HeadlessDriver::new(640, 480);
        let texture = Texture::new();
        assert_eq!(texture.render(&mut driver, 0, 0), Err(TextureError::NotLoaded));
        assert_eq!(
            texture.render_stretched(&mut driver, None),
            Err(TextureError::NotLoaded)
        );
        assert!(driver.draw_calls().is_empty());
    }

    #[test]
    fn test_setters_before_load_apply_on_upload() {
        let mut driver = HeadlessDriver::new(640, 480);
        let mut texture = Texture::new();
        texture.set_color(&mut driver, 10, 20, 30).unwrap();
        texture.set_alpha(&mut driver, 64).unwrap();
        texture.set_blend_mode(&mut driver, BlendMode::Add).unwrap();
        assert!(!texture.is_loaded());

        texture.load_from_pixmap(&mut driver, &checker()).unwrap();
        let handle = texture.handle().unwrap();
        let state = driver.texture(handle).unwrap();
        assert_eq!(state.color_mod, Color::rgb(10, 20, 30));
        assert_eq!(state.alpha_mod, 64);
        assert_eq!(state.blend_mode, BlendMode::Add);
    }

    #[test]
    fn test_setters_after_load_reach_driver() {
        let mut driver = HeadlessDriver::new(640, 480);
        let mut texture = Texture::new();
        texture.load_from_pixmap(&mut driver, &checker()).unwrap();
        let handle = texture.handle().unwrap();

        texture.set_alpha(&mut driver, 0).unwrap();
        texture.set_color(&mut driver, 255, 0, 0).unwrap();
        let state = driver.texture(handle).unwrap();
        assert_eq!(state.alpha_mod, 0);
        assert_eq!(state.color_mod, Color::RED);
    }

    #[test]
    fn test_default_blend_mode_follows_alpha_source() {
        let dir = tempfile::tempdir().unwrap();
        let rgb_path = dir.path().join("opaque.png");
        image::RgbImage::from_pixel(4, 2, image::Rgb([200, 10, 10]))
            .save(&rgb_path)
            .unwrap();
        let mut driver = HeadlessDriver::new(640, 480);

        let mut opaque = Texture::new();
        opaque
            .load_from_file_keyed(&mut driver, &rgb_path, None)
            .unwrap();
        let state = driver.texture(opaque.handle().unwrap()).unwrap();
        assert_eq!(state.blend_mode, BlendMode::None);

        let mut keyed = Texture::new();
        keyed.load_from_file(&mut driver, &rgb_path).unwrap();
        let state = driver.texture(keyed.handle().unwrap()).unwrap();
        assert_eq!(state.blend_mode, BlendMode::Blend);

        let mut buffer = Texture::new();
        buffer.load_from_pixmap(&mut driver, &checker()).unwrap();
        let state = driver.texture(buffer.handle().unwrap()).unwrap();
        assert_eq!(state.blend_mode, BlendMode::Blend);
    }

    #[test]
    fn test_failed_upload_leaves_texture_empty() {
        let mut driver = HeadlessDriver::new(640, 480);
        let mut texture = Texture::new();
        texture.load_from_pixmap(&mut driver, &checker()).unwrap();

        driver.set_fail_uploads(true);
        let result = texture.load_from_pixmap(&mut driver, &checker());
        assert!(matches!(result, Err(TextureError::Upload(_))));
        assert!(!texture.is_loaded());
        assert_eq!((texture.width(), texture.height()), (0, 0));
        assert_eq!(driver.live_textures(), 0);
    }

    #[test]
    fn test_destination_uses_clip_size() {
        let mut driver = HeadlessDriver::new(640, 480);
        let mut texture = Texture::new();
        texture.load_from_pixmap(&mut driver, &checker()).unwrap();

        assert_eq!(texture.destination(5, 6, None), Rect::new(5, 6, 4, 2));
        assert_eq!(
            texture.destination(5, 6, Some(Rect::new(1, 1, 2, 1))),
            Rect::new(5, 6, 2, 1)
        );
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_clip(Rect::new(0, 0, 10, 10))
            .with_angle(90.0)
            .with_center(Point::new(1, 2))
            .with_flip(Flip::Vertical);
        assert_eq!(options.clip, Some(Rect::new(0, 0, 10, 10)));
        assert_eq!(options.angle, 90.0);
        assert_eq!(options.center, Some(Point::new(1, 2)));
        assert_eq!(options.flip, Flip::Vertical);

        let defaults = RenderOptions::default();
        assert_eq!(defaults.clip, None);
        assert_eq!(defaults.angle, 0.0);
        assert_eq!(defaults.center, None);
        assert_eq!(defaults.flip, Flip::None);
    }
}
