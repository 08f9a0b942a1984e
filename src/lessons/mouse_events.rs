//! Mouse events: four buttons in the window corners, each showing the sprite
//! for what the pointer last did over it.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{Color, GraphicsDriver, GraphicsEvent, Rect};
use crate::graphics::texture::Texture;
use crate::lessons::{load_texture, Lesson};
use crate::ui::button::{Button, ButtonSprite, BUTTON_HEIGHT, BUTTON_WIDTH};

pub const TOTAL_BUTTONS: usize = 4;

/// Sprite `i` is the `i`-th 300x200 band of `button.png`, top to bottom.
pub fn sprite_clips() -> [Rect; ButtonSprite::COUNT] {
    std::array::from_fn(|i| {
        let y = (i as u32 * BUTTON_HEIGHT) as i32;
        Rect::new(0, y, BUTTON_WIDTH, BUTTON_HEIGHT)
    })
}

/// Buttons placed in the four corners of a `width` x `height` window.
pub fn corner_buttons(width: u32, height: u32) -> [Button; TOTAL_BUTTONS] {
    let right = width as i32 - BUTTON_WIDTH as i32;
    let bottom = height as i32 - BUTTON_HEIGHT as i32;
    let positions = [(0, 0), (right, 0), (0, bottom), (right, bottom)];

    positions.map(|(x, y)| {
        let mut button = Button::new();
        button.set_position(x, y);
        button
    })
}

pub struct MouseEventsLesson {
    sheet: Texture,
    clips: [Rect; ButtonSprite::COUNT],
    buttons: [Button; TOTAL_BUTTONS],
}

impl MouseEventsLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        let sheet = load_texture(driver, assets, "button.png", Some(Color::CYAN))?;
        let (width, height) = driver.output_size();

        Ok(Self {
            sheet,
            clips: sprite_clips(),
            buttons: corner_buttons(width, height),
        })
    }

    pub fn buttons(&self) -> &[Button; TOTAL_BUTTONS] {
        &self.buttons
    }
}

impl Lesson for MouseEventsLesson {
    fn handle_event(&mut self, event: &GraphicsEvent) {
        for button in &mut self.buttons {
            button.handle_event(event);
        }
    }

    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        for button in &self.buttons {
            button.render(driver, &self.sheet, &self.clips)?;
        }
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        vec![&mut self.sheet]
    }
}
