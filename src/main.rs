use anyhow::{Context, Result};
use clap::Parser;

use sdl_lessons::cli::{lesson_listing, Cli};
use sdl_lessons::config;
use sdl_lessons::graphics::sdl::SdlDriver;
use sdl_lessons::graphics::{GraphicsDriver, HeadlessDriver};
use sdl_lessons::lessons::{load_lesson, run_lesson};
use sdl_lessons::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        println!("{}", lesson_listing());
        return Ok(());
    }
    let kind = cli.lesson_kind()?;

    // Config file first, then command line on top
    let loaded = config::load_config(&cli.configdir)?;
    let options = cli.merge_into_options(loaded.options)?;

    logging::init_logging(options.log_level(), options.log_file.as_deref())?;
    for warning in &loaded.warnings {
        log::warn!("{}", warning);
    }

    log::info!("Configuration:");
    if let Some(res) = &options.resolution {
        log::info!("  Resolution: {}x{}", res.width, res.height);
    }
    if let Some(fullscreen) = options.fullscreen {
        log::info!("  Fullscreen: {}", fullscreen);
    }
    if let Some(vsync) = options.vsync {
        log::info!("  VSync: {}", vsync);
    }
    if let Some(frames) = options.frame_limit() {
        log::info!("  Frame limit: {}", frames);
    }
    if let Some(config_dir) = &options.config_dir {
        log::info!("  Config dir: {}", config_dir);
    }
    log::info!("  Assets: {}", options.assets_path().display());

    let driver_config = options.driver_config();
    let mut driver: Box<dyn GraphicsDriver> = if options.headless == Some(true) {
        Box::new(HeadlessDriver::from_config(&driver_config))
    } else {
        Box::new(SdlDriver::init(&driver_config).context("Failed to initialize SDL")?)
    };

    let mut lesson = load_lesson(kind, driver.as_mut(), &options.assets_path())
        .with_context(|| format!("Failed to load lesson {}", kind))?;
    let frames = run_lesson(driver.as_mut(), lesson.as_mut(), options.frame_limit())?;

    log::info!("Lesson {} finished after {} frames", kind, frames);
    Ok(())
}
