//! SDL2 rendering lessons built around a reusable [`Texture`](graphics::Texture)
//! wrapper and an explicit [`GraphicsDriver`](graphics::GraphicsDriver) context.

pub mod cli;
pub mod config;
pub mod graphics;
pub mod lessons;
pub mod logging;
pub mod ui;

pub use cli::Cli;
pub use config::Options;
pub use lessons::{load_lesson, run_lesson, Lesson, LessonKind};
pub use logging::LogLevel;
