//! Four clips of one sprite sheet, one in each window corner.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{Color, GraphicsDriver, Point, Rect};
use crate::graphics::texture::{RenderOptions, Texture};
use crate::lessons::{load_texture, Lesson};

pub const SPRITE_SIZE: u32 = 100;

/// The four 100x100 cells of `dots.png`, row by row.
pub const SPRITE_CLIPS: [Rect; 4] = [
    Rect::new(0, 0, SPRITE_SIZE, SPRITE_SIZE),
    Rect::new(SPRITE_SIZE as i32, 0, SPRITE_SIZE, SPRITE_SIZE),
    Rect::new(0, SPRITE_SIZE as i32, SPRITE_SIZE, SPRITE_SIZE),
    Rect::new(SPRITE_SIZE as i32, SPRITE_SIZE as i32, SPRITE_SIZE, SPRITE_SIZE),
];

/// Top-left, top-right, bottom-left, bottom-right positions for each clip.
pub fn corner_positions(width: u32, height: u32) -> [Point; 4] {
    let right = width as i32 - SPRITE_CLIPS[1].w as i32;
    let bottom = height as i32 - SPRITE_CLIPS[2].h as i32;
    [
        Point::new(0, 0),
        Point::new(right, 0),
        Point::new(0, bottom),
        Point::new(right, bottom),
    ]
}

pub struct SpriteSheetsLesson {
    sheet: Texture,
}

impl SpriteSheetsLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            sheet: load_texture(driver, assets, "dots.png", Some(Color::CYAN))?,
        })
    }
}

impl Lesson for SpriteSheetsLesson {
    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        let (width, height) = driver.output_size();
        for (clip, position) in SPRITE_CLIPS.iter().zip(corner_positions(width, height)) {
            self.sheet.render_ex(
                driver,
                position.x,
                position.y,
                &RenderOptions::new().with_clip(*clip),
            )?;
        }
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.sheet]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_positions() {
        assert_eq!(
            corner_positions(640, 480),
            [
                Point::new(0, 0),
                Point::new(540, 0),
                Point::new(0, 380),
                Point::new(540, 380),
            ]
        );
    }
}
