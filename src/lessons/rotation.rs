//! Rotation and flipping. `a`/`d` turn the arrow by 60 degrees,
//! `q`/`w`/`e` select horizontal, no, or vertical flip.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{Color, Flip, GraphicsDriver, GraphicsEvent, Key};
use crate::graphics::texture::{RenderOptions, Texture};
use crate::lessons::{load_texture, Lesson};

pub const ROTATION_STEP: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub degrees: f64,
    pub flip: Flip,
}

impl Orientation {
    pub fn apply_key(&mut self, key: Key) {
        match key {
            Key::Char('a') => self.degrees -= ROTATION_STEP,
            Key::Char('d') => self.degrees += ROTATION_STEP,
            Key::Char('q') => self.flip = Flip::Horizontal,
            Key::Char('w') => self.flip = Flip::None,
            Key::Char('e') => self.flip = Flip::Vertical,
            _ => {}
        }
    }
}

pub struct RotationLesson {
    arrow: Texture,
    orientation: Orientation,
}

impl RotationLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            arrow: load_texture(driver, assets, "arrow.png", Some(Color::CYAN))?,
            orientation: Orientation::default(),
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Lesson for RotationLesson {
    fn handle_event(&mut self, event: &GraphicsEvent) {
        if let GraphicsEvent::KeyDown(key) = *event {
            self.orientation.apply_key(key);
        }
    }

    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        let (width, height) = driver.output_size();
        let x = (width as i32 - self.arrow.width() as i32) / 2;
        let y = (height as i32 - self.arrow.height() as i32) / 2;
        let options = RenderOptions::new()
            .with_angle(self.orientation.degrees)
            .with_flip(self.orientation.flip);
        self.arrow.render_ex(driver, x, y, &options)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.arrow]
    }
}
