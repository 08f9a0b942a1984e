//! Key presses: each arrow key shows its own bitmap.

use std::path::Path;

use anyhow::Result;

use crate::graphics::common::{Color, GraphicsDriver, GraphicsEvent, Key};
use crate::graphics::texture::Texture;
use crate::lessons::{load_texture, Lesson};

/// Which of the five direction images is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionImage {
    #[default]
    Default,
    Up,
    Down,
    Left,
    Right,
}

impl DirectionImage {
    pub const ALL: [DirectionImage; 5] = [
        Self::Default,
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Default => 0,
            Self::Up => 1,
            Self::Down => 2,
            Self::Left => 3,
            Self::Right => 4,
        }
    }

    /// Asset file stem.
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Default => "press",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Image for a pressed key; anything but an arrow shows the default.
    pub fn for_key(key: Key) -> Self {
        match key {
            Key::Up => Self::Up,
            Key::Down => Self::Down,
            Key::Left => Self::Left,
            Key::Right => Self::Right,
            _ => Self::Default,
        }
    }
}

/// Load all five direction images with the given extension.
pub(crate) fn load_direction_images(
    driver: &mut dyn GraphicsDriver,
    assets: &Path,
    extension: &str,
    color_key: Option<Color>,
) -> Result<[Texture; 5]> {
    let mut images: [Texture; 5] = Default::default();
    for image in DirectionImage::ALL {
        let file = format!("{}.{}", image.stem(), extension);
        images[image.index()] = load_texture(driver, assets, &file, color_key)?;
    }
    Ok(images)
}

pub struct KeyPressesLesson {
    images: [Texture; 5],
    current: DirectionImage,
}

impl KeyPressesLesson {
    pub fn load(driver: &mut dyn GraphicsDriver, assets: &Path) -> Result<Self> {
        Ok(Self {
            images: load_direction_images(driver, assets, "bmp", None)?,
            current: DirectionImage::Default,
        })
    }

    pub fn current(&self) -> DirectionImage {
        self.current
    }
}

impl Lesson for KeyPressesLesson {
    fn handle_event(&mut self, event: &GraphicsEvent) {
        if let GraphicsEvent::KeyDown(key) = *event {
            self.current = DirectionImage::for_key(key);
        }
    }

    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        self.images[self.current.index()].render(driver, 0, 0)?;
        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        self.images.iter_mut().collect()
    }
}
