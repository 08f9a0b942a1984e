//! The same texture stretched into three viewports.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{GraphicsDriver, Rect};
use crate::graphics::texture::Texture;
use crate::lessons::{load_texture, Lesson};

/// Top-left quarter, top-right quarter, bottom half.
pub fn viewports(width: u32, height: u32) -> [Rect; 3] {
    let half_w = width / 2;
    let half_h = height / 2;
    [
        Rect::new(0, 0, half_w, half_h),
        Rect::new(half_w as i32, 0, half_w, half_h),
        Rect::new(0, half_h as i32, width, half_h),
    ]
}

pub struct ViewportLesson {
    texture: Texture,
}

impl ViewportLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            texture: load_texture(driver, assets, "viewport.png", None)?,
        })
    }
}

impl Lesson for ViewportLesson {
    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        let (width, height) = driver.output_size();
        for viewport in viewports(width, height) {
            driver.set_viewport(Some(viewport))?;
            self.texture.render_stretched(driver, None)?;
        }
        driver.set_viewport(None)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.texture]
    }
}
