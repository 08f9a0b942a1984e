//! Color modulation. `q`/`w`/`e` raise red, green and blue by 32,
//! `a`/`s`/`d` lower them. Channels wrap around.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{Color, GraphicsDriver, GraphicsEvent, Key};
use crate::graphics::texture::Texture;
use crate::lessons::{load_texture, Lesson};

pub const COLOR_STEP: u8 = 32;

/// Current RGB multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modulation {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Modulation {
    /// Apply one key press. Returns false for keys that do nothing.
    pub fn apply_key(&mut self, key: Key) -> bool {
        let Key::Char(c) = key else {
            return false;
        };
        match c {
            'q' => self.r = self.r.wrapping_add(COLOR_STEP),
            'w' => self.g = self.g.wrapping_add(COLOR_STEP),
            'e' => self.b = self.b.wrapping_add(COLOR_STEP),
            'a' => self.r = self.r.wrapping_sub(COLOR_STEP),
            's' => self.g = self.g.wrapping_sub(COLOR_STEP),
            'd' => self.b = self.b.wrapping_sub(COLOR_STEP),
            _ => return false,
        }
        true
    }
}

pub struct ColorModulationLesson {
    texture: Texture,
    modulation: Modulation,
}

impl ColorModulationLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            texture: load_texture(driver, assets, "colors.png", Some(Color::CYAN))?,
            modulation: Modulation::default(),
        })
    }

    pub fn modulation(&self) -> Modulation {
        self.modulation
    }
}

impl Lesson for ColorModulationLesson {
    fn handle_event(&mut self, event: &GraphicsEvent) {
        if let GraphicsEvent::KeyDown(key) = *event {
            self.modulation.apply_key(key);
        }
    }

    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        let Modulation { r, g, b } = self.modulation;
        self.texture.set_color(driver, r, g, b)?;
        self.texture.render(driver, 0, 0)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.texture]
    }
}
