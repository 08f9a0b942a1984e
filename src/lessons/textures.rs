//! Stretch one texture over the whole render target.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::GraphicsDriver;
use crate::graphics::texture::Texture;
use crate::lessons::{load_texture, Lesson};

pub struct TexturesLesson {
    texture: Texture,
}

impl TexturesLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            texture: load_texture(driver, assets, "texture.png", None)?,
        })
    }
}

impl Lesson for TexturesLesson {
    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        self.texture.render_stretched(driver, None)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.texture]
    }
}
