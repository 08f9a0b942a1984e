use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::graphics::common::{DriverConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::logging::LogLevel;

/// Name of the config file looked up in the config directory.
pub const CONFIG_FILE_NAME: &str = "lessons.cfg";

/// Launcher options that can be set via CLI or config file
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    // Commandline-only options
    pub log_file: Option<String>,
    pub config_dir: Option<String>,
    pub headless: Option<bool>,

    // Commandline and config file options
    pub assets_dir: Option<String>,
    pub resolution: Option<Resolution>,
    pub fullscreen: Option<bool>,
    pub vsync: Option<bool>,
    pub frames: Option<u64>,
    pub log_level: Option<LogLevel>,
}

/// Options read from `lessons.cfg`, with the lines that were skipped.
///
/// The caller logs `warnings` once the logger is installed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedConfig {
    pub options: Options,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            log_file: None,
            config_dir: None,
            headless: None,
            assets_dir: None,
            resolution: Some(Resolution {
                width: SCREEN_WIDTH,
                height: SCREEN_HEIGHT,
            }),
            fullscreen: None,
            vsync: None,
            frames: None,
            log_level: None,
        }
    }
}

impl Options {
    /// Directory lesson assets are read from. Defaults to the working directory.
    pub fn assets_path(&self) -> PathBuf {
        self.assets_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    /// Frame limit for the run. Headless runs stop after one frame unless
    /// told otherwise.
    pub fn frame_limit(&self) -> Option<u64> {
        match self.frames {
            Some(frames) => Some(frames),
            None if self.headless == Some(true) => Some(1),
            None => None,
        }
    }

    /// Window settings derived from these options.
    pub fn driver_config(&self) -> DriverConfig {
        let res = self.resolution.unwrap_or(Resolution {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        });
        DriverConfig::windowed(res.width, res.height)
            .with_fullscreen(self.fullscreen.unwrap_or(false))
            .with_vsync(self.vsync.unwrap_or(false))
    }

    /// Apply one `key = value` setting from the config file.
    ///
    /// Returns `false` for a key this launcher does not know.
    pub fn apply_setting(&mut self, key: &str, value: &str) -> Result<bool> {
        match key {
            "res" => {
                self.resolution = Some(
                    parse_resolution(value)
                        .with_context(|| format!("Invalid resolution in config: {}", value))?,
                )
            }
            "fullscreen" => self.fullscreen = Some(parse_bool(value)?),
            "vsync" => self.vsync = Some(parse_bool(value)?),
            "assets" => self.assets_dir = Some(value.to_string()),
            "loglevel" => self.log_level = Some(LogLevel::from_name(value)?),
            "frames" => {
                self.frames = Some(
                    parse_frames(value)
                        .with_context(|| format!("Invalid frame count in config: {}", value))?,
                )
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Load configuration from `lessons.cfg` in `config_dir`.
///
/// A missing directory argument or a missing file yields the defaults.
/// Malformed lines and unknown keys are skipped and reported in
/// [`LoadedConfig::warnings`]; bad values are errors.
pub fn load_config(config_dir: &Option<String>) -> Result<LoadedConfig> {
    let mut loaded = LoadedConfig::default();

    let Some(dir) = config_dir else {
        return Ok(loaded);
    };
    loaded.options.config_dir = Some(dir.clone());

    let path = Path::new(dir).join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(loaded);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let (pairs, malformed) = parse_key_values(&data);
    loaded.warnings = malformed
        .into_iter()
        .map(|warning| format!("{}: {}", path.display(), warning))
        .collect();

    for (key, value) in pairs {
        let known = loaded
            .options
            .apply_setting(key, value)
            .with_context(|| format!("In {}", path.display()))?;
        if !known {
            loaded.warnings.push(format!(
                "{}: ignoring unknown config key: {}",
                path.display(),
                key
            ));
        }
    }

    Ok(loaded)
}

/// Split `key = value` lines. `#` starts a comment anywhere on a line; keys
/// and values are trimmed. Lines without `=` are skipped and described in
/// the second list.
pub fn parse_key_values(data: &str) -> (Vec<(&str, &str)>, Vec<String>) {
    let mut pairs = Vec::new();
    let mut warnings = Vec::new();

    for (number, line) in data.lines().enumerate() {
        let line = match line.find('#') {
            Some(hash) => &line[..hash],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                pairs.push((key.trim(), value.trim()));
            }
            _ => warnings.push(format!("key without value on line {}", number + 1)),
        }
    }

    (pairs, warnings)
}

/// Parse a frame count. Zero is rejected.
pub fn parse_frames(s: &str) -> Result<u64> {
    let frames: u64 = s.trim().parse().context("Invalid frame count")?;
    if frames == 0 {
        anyhow::bail!("Frame count must be positive");
    }
    Ok(frames)
}

/// Parse a resolution string in the format "WIDTHxHEIGHT"
pub fn parse_resolution(s: &str) -> Result<Resolution> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        anyhow::bail!("Resolution must be in WIDTHxHEIGHT format");
    }

    let width: u32 = parts[0].parse().context("Invalid width value")?;
    let height: u32 = parts[1].parse().context("Invalid height value")?;

    if width == 0 || height == 0 {
        anyhow::bail!("Resolution values must be positive");
    }

    Ok(Resolution { width, height })
}

/// Parse a boolean setting (`true/false`, `yes/no`, `on/off`, `1/0`)
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => anyhow::bail!("Invalid boolean value: {}", s),
    }
}
