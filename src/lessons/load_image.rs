//! Load a PNG and show it at its natural size.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::GraphicsDriver;
use crate::graphics::texture::Texture;
use crate::lessons::{load_texture, Lesson};

pub struct LoadImageLesson {
    image: Texture,
}

impl LoadImageLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            image: load_texture(driver, assets, "loaded.png", None)?,
        })
    }
}

impl Lesson for LoadImageLesson {
    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        self.image.render(driver, 0, 0)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.image]
    }
}
