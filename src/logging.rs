use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Log levels accepted by `--loglevel` and the `loglevel` config key.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Nothing = 0,
    User = 1,
    Error = 2,
    Warning = 3,
    #[default]
    Info = 4,
    Debug = 5,
    All = 6,
}

impl LogLevel {
    /// Create a LogLevel from an integer. Out-of-range values map to `Info`.
    pub fn from_i32(level: i32) -> Self {
        match level {
            0 => LogLevel::Nothing,
            1 => LogLevel::User,
            2 => LogLevel::Error,
            3 => LogLevel::Warning,
            4 => LogLevel::Info,
            5 => LogLevel::Debug,
            6 => LogLevel::All,
            _ => LogLevel::Info,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Parse a level by name or number.
    pub fn from_name(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(level) = s.parse::<i32>() {
            if !(0..=6).contains(&level) {
                anyhow::bail!("Log level out of range (0 to 6): {}", level);
            }
            return Ok(Self::from_i32(level));
        }

        match s.to_lowercase().as_str() {
            "nothing" | "off" => Ok(LogLevel::Nothing),
            "user" => Ok(LogLevel::User),
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "all" | "trace" => Ok(LogLevel::All),
            _ => anyhow::bail!(
                "Invalid log level: {}. Valid options: nothing, user, error, warning, info, debug, all",
                s
            ),
        }
    }

    /// Filter for the `log` facade. `User` messages are logged at error level.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Nothing => LevelFilter::Off,
            LogLevel::User | LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::All => LevelFilter::Trace,
        }
    }
}

/// Install the global logger. Output goes to stderr, or to `log_file`
/// (truncated) when given. `RUST_LOG` still overrides per-module filters.
pub fn init_logging(level: LogLevel, log_file: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        });

    if let Some(path) = log_file {
        let file =
            File::create(path).with_context(|| format!("Failed to open log file {}", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .context("Logger was already initialized")?;
    Ok(())
}
