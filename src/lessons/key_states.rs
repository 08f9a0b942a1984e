//! Key states: the image follows whichever arrow key is currently held.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{Color, GraphicsDriver, Key};
use crate::graphics::texture::Texture;
use crate::lessons::key_presses::{load_direction_images, DirectionImage};
use crate::lessons::Lesson;

/// Pick an image from held keys. Up wins over down, down over right,
/// right over left.
pub fn image_for_held_keys(is_pressed: impl Fn(Key) -> bool) -> DirectionImage {
    if is_pressed(Key::Up) {
        DirectionImage::Up
    } else if is_pressed(Key::Down) {
        DirectionImage::Down
    } else if is_pressed(Key::Right) {
        DirectionImage::Right
    } else if is_pressed(Key::Left) {
        DirectionImage::Left
    } else {
        DirectionImage::Default
    }
}

pub struct KeyStatesLesson {
    images: [Texture; 5],
    current: DirectionImage,
}

impl KeyStatesLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            images: load_direction_images(driver, assets, "png", Some(Color::CYAN))?,
            current: DirectionImage::Default,
        })
    }

    pub fn current(&self) -> DirectionImage {
        self.current
    }
}

impl Lesson for KeyStatesLesson {
    fn update(&mut self, driver: &dyn GraphicsDriver) {
        self.current = image_for_held_keys(|key| driver.is_key_pressed(key));
    }

    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        self.images[self.current.index()].render(driver, 0, 0)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        self.images.iter_mut().collect()
    }
}
