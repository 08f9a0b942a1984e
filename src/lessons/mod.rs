//! The lesson programs and the loop that drives them.
//!
//! Every lesson follows the same shape: load its assets through the driver,
//! react to events, draw one frame on a white background, and free its
//! textures on exit. [`run_lesson`] owns the loop; [`load_lesson`] builds a
//! lesson by name.

pub mod alpha_blending;
pub mod color_keying;
pub mod color_modulation;
pub mod fonts;
pub mod geometry;
pub mod key_presses;
pub mod key_states;
pub mod load_image;
pub mod mouse_events;
pub mod rotation;
pub mod sprite_sheets;
pub mod textures;
pub mod viewport;

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use crate::graphics::common::{Color, GraphicsDriver, GraphicsEvent, Key};
use crate::graphics::texture::Texture;

/// One demo program.
pub trait Lesson {
    /// React to a single input or window event.
    fn handle_event(&mut self, _event: &GraphicsEvent) {}

    /// Sample polled state (keyboard) once per frame, after events.
    fn update(&mut self, _driver: &dyn GraphicsDriver) {}

    /// Draw one frame. The target is already cleared to white.
    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()>;

    /// Textures owned by the lesson, freed on exit.
    fn textures_mut(&mut self) -> Vec<&mut Texture>;

    /// Release every texture.
    fn close(&mut self, driver: &mut dyn GraphicsDriver) {
        for texture in self.textures_mut() {
            texture.free(driver);
        }
    }
}

/// Lesson names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonKind {
    KeyPresses,
    LoadImage,
    Textures,
    Geometry,
    Viewport,
    ColorKeying,
    SpriteSheets,
    ColorModulation,
    AlphaBlending,
    Rotation,
    Fonts,
    MouseEvents,
    KeyStates,
}

impl LessonKind {
    pub const ALL: [LessonKind; 13] = [
        Self::KeyPresses,
        Self::LoadImage,
        Self::Textures,
        Self::Geometry,
        Self::Viewport,
        Self::ColorKeying,
        Self::SpriteSheets,
        Self::ColorModulation,
        Self::AlphaBlending,
        Self::Rotation,
        Self::Fonts,
        Self::MouseEvents,
        Self::KeyStates,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::KeyPresses => "key-presses",
            Self::LoadImage => "load-image",
            Self::Textures => "textures",
            Self::Geometry => "geometry",
            Self::Viewport => "viewport",
            Self::ColorKeying => "color-keying",
            Self::SpriteSheets => "sprite-sheets",
            Self::ColorModulation => "color-modulation",
            Self::AlphaBlending => "alpha-blending",
            Self::Rotation => "rotation",
            Self::Fonts => "fonts",
            Self::MouseEvents => "mouse-events",
            Self::KeyStates => "key-states",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::KeyPresses => "arrow keys switch between bitmaps",
            Self::LoadImage => "show a PNG at its natural size",
            Self::Textures => "stretch a texture over the window",
            Self::Geometry => "rectangles, lines and points",
            Self::Viewport => "one texture in three viewports",
            Self::ColorKeying => "cyan pixels become transparent",
            Self::SpriteSheets => "four clips from one sheet",
            Self::ColorModulation => "q/w/e and a/s/d tint the texture",
            Self::AlphaBlending => "w/s fade the front texture",
            Self::Rotation => "a/d rotate, q/w/e flip",
            Self::Fonts => "render a line of TrueType text",
            Self::MouseEvents => "four buttons reacting to the mouse",
            Self::KeyStates => "hold arrow keys to switch images",
        }
    }

    /// Parse a lesson name, case-insensitively; `_` and `-` are equivalent.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|kind| kind.name()).collect();
                anyhow::anyhow!(
                    "Unknown lesson: {}. Valid options: {}",
                    name,
                    valid.join(", ")
                )
            })
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Load the lesson `kind` with assets from `assets`.
pub fn load_lesson(
    kind: LessonKind,
    driver: &mut dyn GraphicsDriver,
    assets: &Path,
) -> Result<Box<dyn Lesson>> {
    log::info!("Loading lesson {} from {}", kind, assets.display());

    let lesson: Box<dyn Lesson> = match kind {
        LessonKind::KeyPresses => Box::new(key_presses::KeyPressesLesson::load(driver, assets)?),
        LessonKind::LoadImage => Box::new(load_image::LoadImageLesson::load(driver, assets)?),
        LessonKind::Textures => Box::new(textures::TexturesLesson::load(driver, assets)?),
        LessonKind::Geometry => Box::new(geometry::GeometryLesson::new()),
        LessonKind::Viewport => Box::new(viewport::ViewportLesson::load(driver, assets)?),
        LessonKind::ColorKeying => {
            Box::new(color_keying::ColorKeyingLesson::load(driver, assets)?)
        }
        LessonKind::SpriteSheets => {
            Box::new(sprite_sheets::SpriteSheetsLesson::load(driver, assets)?)
        }
        LessonKind::ColorModulation => Box::new(
            color_modulation::ColorModulationLesson::load(driver, assets)?,
        ),
        LessonKind::AlphaBlending => {
            Box::new(alpha_blending::AlphaBlendingLesson::load(driver, assets)?)
        }
        LessonKind::Rotation => Box::new(rotation::RotationLesson::load(driver, assets)?),
        LessonKind::Fonts => Box::new(fonts::FontsLesson::load_ttf(driver, assets)?),
        LessonKind::MouseEvents => {
            Box::new(mouse_events::MouseEventsLesson::load(driver, assets)?)
        }
        LessonKind::KeyStates => Box::new(key_states::KeyStatesLesson::load(driver, assets)?),
    };

    Ok(lesson)
}

/// Load `file` from the asset directory into a fresh texture.
pub(crate) fn load_texture(
    driver: &mut dyn GraphicsDriver,
    assets: &Path,
    file: &str,
    color_key: Option<Color>,
) -> Result<Texture> {
    let path = assets.join(file);
    let mut texture = Texture::new();
    texture
        .load_from_file_keyed(driver, &path, color_key)
        .with_context(|| format!("Failed to load texture {}", path.display()))?;
    Ok(texture)
}

fn is_quit(event: &GraphicsEvent) -> bool {
    matches!(
        event,
        GraphicsEvent::Quit | GraphicsEvent::KeyDown(Key::Escape)
    )
}

/// Run `lesson` until the window is closed, Escape is pressed, or
/// `max_frames` frames have been presented. Returns the frame count.
///
/// The lesson is closed whether the loop ends normally or with an error.
pub fn run_lesson(
    driver: &mut dyn GraphicsDriver,
    lesson: &mut dyn Lesson,
    max_frames: Option<u64>,
) -> Result<u64> {
    let result = run_frames(driver, lesson, max_frames);
    lesson.close(driver);
    result
}

fn run_frames(
    driver: &mut dyn GraphicsDriver,
    lesson: &mut dyn Lesson,
    max_frames: Option<u64>,
) -> Result<u64> {
    let mut frames = 0;

    'main: loop {
        for event in driver.poll_events()? {
            if is_quit(&event) {
                log::debug!("Quit requested after {} frames", frames);
                break 'main;
            }
            lesson.handle_event(&event);
        }

        lesson.update(&*driver);

        driver.set_draw_color(Color::WHITE);
        driver.clear()?;
        lesson.draw(driver)?;
        driver.present()?;

        frames += 1;
        if max_frames.is_some_and(|max| frames >= max) {
            break;
        }
    }

    Ok(frames)
}
