//! TrueType text rendered once into a texture and centered.

use std::path::Path;

use anyhow::{Context, Result};

use crate::graphics::common::{Color, GraphicsDriver};
use crate::graphics::font::TextRasterizer;
use crate::graphics::sdl::TtfContext;
use crate::graphics::texture::Texture;
use crate::lessons::Lesson;

pub const FONT_FILE: &str = "lazy.ttf";
pub const FONT_POINT_SIZE: u16 = 28;
pub const TEXT: &str = "The quick brown fox jumps over the lazy dog";

pub struct FontsLesson {
    text: Texture,
}

impl FontsLesson {
    /// Render [`TEXT`] in black with `font`.
    pub fn load(driver: &mut dyn GraphicsDriver, font: &dyn TextRasterizer) -> Result<Self> {
        let mut text = Texture::new();
        text.load_from_rendered_text(driver, font, TEXT, Color::BLACK)
            .context("Failed to render text texture")?;
        Ok(Self { text })
    }

    /// Open `lazy.ttf` from `assets` and render with it. The font is closed
    /// again once the text texture exists.
    pub fn load_ttf(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        let ttf = TtfContext::init()?;
        let font = ttf.open_font(assets.join(FONT_FILE), FONT_POINT_SIZE)?;
        Self::load(driver, &font)
    }

    pub fn text(&self) -> &Texture {
        &self.text
    }
}

impl Lesson for FontsLesson {
    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        let (width, height) = driver.output_size();
        let x = (width as i32 - self.text.width() as i32) / 2;
        let y = (height as i32 - self.text.height() as i32) / 2;
        self.text.render(driver, x, y)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.text]
    }
}
