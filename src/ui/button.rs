//! Mouse-driven button backed by a sprite sheet.

use crate::graphics::common::{GraphicsDriver, GraphicsEvent, Point, Rect};
use crate::graphics::texture::{RenderOptions, Texture, TextureResult};

pub const BUTTON_WIDTH: u32 = 300;
pub const BUTTON_HEIGHT: u32 = 200;

/// Sprite-sheet cell shown for each pointer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(usize)]
pub enum ButtonSprite {
    #[default]
    MouseOut = 0,
    MouseOverMotion = 1,
    MouseDown = 2,
    MouseUp = 3,
}

impl ButtonSprite {
    pub const COUNT: usize = 4;

    /// Index of the matching clip in the sprite sheet.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A rectangular hit area that tracks what the mouse is doing over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    position: Point,
    width: u32,
    height: u32,
    current_sprite: ButtonSprite,
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Button {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_size(BUTTON_WIDTH, BUTTON_HEIGHT)
    }

    #[must_use]
    pub const fn with_size(width: u32, height: u32) -> Self {
        Self {
            position: Point::new(0, 0),
            width,
            height,
            current_sprite: ButtonSprite::MouseOut,
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Point::new(x, y);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn current_sprite(&self) -> ButtonSprite {
        self.current_sprite
    }

    /// Hit test with inclusive edges: the pixel one past the right/bottom
    /// border still counts as inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let right = self.position.x + self.width as i32;
        let bottom = self.position.y + self.height as i32;
        x >= self.position.x && x <= right && y >= self.position.y && y <= bottom
    }

    /// Update the sprite from a mouse event. Other events are ignored.
    pub fn handle_event(&mut self, event: &GraphicsEvent) {
        let (x, y, sprite) = match *event {
            GraphicsEvent::MouseMotion { x, y } => (x, y, ButtonSprite::MouseOverMotion),
            GraphicsEvent::MouseButtonDown { x, y } => (x, y, ButtonSprite::MouseDown),
            GraphicsEvent::MouseButtonUp { x, y } => (x, y, ButtonSprite::MouseUp),
            _ => return,
        };

        self.current_sprite = if self.contains(x, y) {
            sprite
        } else {
            ButtonSprite::MouseOut
        };
    }

    /// Draw the clip for the current state at the button's position.
    pub fn render(
        &self,
        driver: &mut dyn GraphicsDriver,
        sheet: &Texture,
        clips: &[Rect; ButtonSprite::COUNT],
    ) -> TextureResult<()> {
        let clip = clips[self.current_sprite.index()];
        sheet.render_ex(
            driver,
            self.position.x,
            self.position.y,
            &RenderOptions::new().with_clip(clip),
        )
    }
}
