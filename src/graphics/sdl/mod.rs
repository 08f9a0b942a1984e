//!
//! SDL2 backend for the graphics subsystem.
//!
//! # Architecture
//!
//! - `sdl2`: [`SdlDriver`], the window/renderer/event-pump context
//! - `ttf`: SDL_ttf font loading and text rasterization

pub mod sdl2;
pub mod ttf;

use ::sdl2::pixels::PixelFormatEnum;

/// Texture format whose byte order matches [`Pixmap`](crate::graphics::pixmap::Pixmap)'s RGBA rows.
#[cfg(target_endian = "big")]
pub(crate) const RGBA_PIXEL_FORMAT: PixelFormatEnum = PixelFormatEnum::RGBA8888;

#[cfg(target_endian = "little")]
pub(crate) const RGBA_PIXEL_FORMAT: PixelFormatEnum = PixelFormatEnum::ABGR8888;

pub use self::sdl2::SdlDriver;
pub use self::ttf::{TtfContext, TtfFont};
