//! Graphics subsystem: drivers, pixel buffers, fonts and the texture wrapper.

pub mod common;
pub mod font;
pub mod headless;
pub mod pixmap;
pub mod sdl;
pub mod texture;

pub use common::{
    BlendMode, Color, CopyRequest, DriverConfig, DriverError, DriverResult, Flip, GraphicsDriver,
    GraphicsEvent, Key, Point, Rect, TextureHandle, SCREEN_HEIGHT, SCREEN_WIDTH,
};
pub use headless::HeadlessDriver;
pub use pixmap::Pixmap;
pub use texture::{RenderOptions, Texture, TextureError, TextureResult};
