//! Interactive widgets built on top of [`Texture`](crate::graphics::Texture).

pub mod button;

pub use button::{Button, ButtonSprite, BUTTON_HEIGHT, BUTTON_WIDTH};
