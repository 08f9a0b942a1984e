//! Alpha blending: `w` and `s` fade a front texture over a background.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{BlendMode, Color, GraphicsDriver, GraphicsEvent, Key};
use crate::graphics::texture::Texture;
use crate::lessons::{load_texture, Lesson};

pub const ALPHA_STEP: u8 = 32;

/// New alpha after a key press. Saturates at both ends.
pub fn step_alpha(alpha: u8, key: Key) -> u8 {
    match key {
        Key::Char('w') => alpha.saturating_add(ALPHA_STEP),
        Key::Char('s') => alpha.saturating_sub(ALPHA_STEP),
        _ => alpha,
    }
}

pub struct AlphaBlendingLesson {
    background: Texture,
    front: Texture,
    alpha: u8,
}

impl AlphaBlendingLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        let background = load_texture(driver, assets, "fadein.png", Some(Color::CYAN))?;
        let mut front = load_texture(driver, assets, "fadeout.png", Some(Color::CYAN))?;
        front.set_blend_mode(driver, BlendMode::Blend)?;

        Ok(Self {
            background,
            front,
            alpha: u8::MAX,
        })
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }
}

impl Lesson for AlphaBlendingLesson {
    fn handle_event(&mut self, event: &GraphicsEvent) {
        if let GraphicsEvent::KeyDown(key) = *event {
            self.alpha = step_alpha(self.alpha, key);
        }
    }

    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        self.background.render(driver, 0, 0)?;
        self.front.set_alpha(driver, self.alpha)?;
        self.front.render(driver, 0, 0)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.background, &mut self.front]
    }
}
