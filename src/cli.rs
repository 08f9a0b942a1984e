use crate::config::{parse_frames, parse_resolution, Options};
use crate::lessons::LessonKind;
use crate::logging::LogLevel;
use anyhow::{Context, Result};
use clap::Parser;

/// SDL2 lesson programs built on a shared texture wrapper
#[derive(Parser, Debug, Default)]
#[command(name = "sdl-lessons")]
#[command(version)]
#[command(about = "Run one of the SDL2 rendering lessons", long_about = None)]
pub struct Cli {
    /// Lesson to run (see --list)
    #[arg(value_name = "LESSON", required_unless_present = "list")]
    pub lesson: Option<String>,

    /// List the available lessons and exit
    #[arg(long)]
    pub list: bool,

    /// Directory holding the lesson's images and fonts
    #[arg(short, long, value_name = "DIR")]
    pub assets: Option<String>,

    /// Window resolution (e.g., 640x480)
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub res: Option<String>,

    /// Enable fullscreen mode
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Enable windowed mode
    #[arg(short, long, conflicts_with = "fullscreen")]
    pub windowed: bool,

    /// Synchronize presents with the display refresh
    #[arg(long)]
    pub vsync: bool,

    /// Stop after this many frames
    #[arg(long, value_name = "N")]
    pub frames: Option<String>,

    /// Run without a window, recording draw calls only
    #[arg(long)]
    pub headless: bool,

    /// Configuration directory path
    #[arg(short, long, value_name = "CONFIGDIR")]
    pub configdir: Option<String>,

    /// Log file path
    #[arg(short, long, value_name = "FILE")]
    pub logfile: Option<String>,

    /// Log level (nothing, user, error, warning, info, debug, all)
    #[arg(long, value_name = "LEVEL")]
    pub loglevel: Option<String>,
}

impl Cli {
    /// Merge CLI arguments into the options struct
    pub fn merge_into_options(&self, mut opts: Options) -> Result<Options> {
        if let Some(ref assets) = self.assets {
            opts.assets_dir = Some(assets.clone());
        }

        if let Some(ref res) = self.res {
            opts.resolution = Some(parse_resolution(res).context("Invalid resolution format")?);
        }

        if self.fullscreen {
            opts.fullscreen = Some(true);
        }
        if self.windowed {
            opts.fullscreen = Some(false);
        }
        if self.vsync {
            opts.vsync = Some(true);
        }

        if let Some(ref frames) = self.frames {
            opts.frames = Some(parse_frames(frames)?);
        }

        if self.headless {
            opts.headless = Some(true);
        }

        if let Some(ref config_dir) = self.configdir {
            opts.config_dir = Some(config_dir.clone());
        }

        if let Some(ref log_file) = self.logfile {
            opts.log_file = Some(log_file.clone());
        }

        if let Some(ref level) = self.loglevel {
            opts.log_level = Some(LogLevel::from_name(level)?);
        }

        Ok(opts)
    }

    /// The selected lesson. Fails when no name was given or it is unknown.
    pub fn lesson_kind(&self) -> Result<LessonKind> {
        match self.lesson {
            Some(ref name) => LessonKind::from_name(name),
            None => anyhow::bail!("No lesson given. Use --list to see the available lessons"),
        }
    }
}

/// One line per lesson: name and what it shows.
pub fn lesson_listing() -> String {
    LessonKind::ALL
        .iter()
        .map(|kind| format!("{:<18}{}", kind.name(), kind.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
