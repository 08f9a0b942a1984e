//! A keyed sprite over a background.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{Color, GraphicsDriver, Point};
use crate::graphics::texture::Texture;
use crate::lessons::{load_texture, Lesson};

pub const FOO_POSITION: Point = Point::new(250, 200);

pub struct ColorKeyingLesson {
    background: Texture,
    foo: Texture,
}

impl ColorKeyingLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            background: load_texture(driver, assets, "background.png", Some(Color::CYAN))?,
            foo: load_texture(driver, assets, "foo.png", Some(Color::CYAN))?,
        })
    }
}

impl Lesson for ColorKeyingLesson {
    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        self.background.render(driver, 0, 0)?;
        self.foo.render(driver, FOO_POSITION.x, FOO_POSITION.y)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.background, &mut self.foo]
    }
}
