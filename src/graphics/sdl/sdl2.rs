//!
//! SDL2 hardware-accelerated driver.
//!
//! **Supported:**
//! - Window creation (windowed or desktop fullscreen, optional vsync)
//! - Accelerated renderer with per-texture color/alpha/blend modulation
//! - Rotated and flipped texture copies, viewports, primitive shapes
//! - Keyboard, mouse, and window event handling
//! - Polled keyboard state
//!
//! Textures are created with the `unsafe_textures` feature of the `sdl2`
//! crate, so they carry no borrow of the texture creator. The driver keeps
//! them in a handle table and destroys whatever is left when it is dropped.
//!

use std::collections::HashMap;

use sdl2::{
    event::Event,
    keyboard::{Keycode, Scancode},
    pixels::Color as SdlColor,
    rect::{Point as SdlPoint, Rect as SdlRect},
    render::{BlendMode as SdlBlendMode, Canvas, Texture as SdlTexture, TextureCreator},
    video::{Window, WindowContext},
    EventPump, Sdl, VideoSubsystem,
};

use crate::graphics::common::{
    BlendMode, Color, CopyRequest, DriverConfig, DriverError, DriverResult, GraphicsDriver,
    GraphicsEvent, Key, Point, Rect, TextureHandle,
};
use crate::graphics::pixmap::Pixmap;
use crate::graphics::sdl::RGBA_PIXEL_FORMAT;

/// SDL2 graphics driver.
///
/// # Thread Safety
///
/// SDL2 must be initialized on the main thread. Every method must be called
/// from the thread that created the driver.
pub struct SdlDriver {
    /// Live textures by handle.
    textures: HashMap<TextureHandle, SdlTexture>,
    next_texture_id: u32,
    texture_creator: TextureCreator<WindowContext>,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    config: DriverConfig,
    _video_subsystem: VideoSubsystem,
    _sdl_context: Sdl,
}

impl SdlDriver {
    /// Initialize SDL2 and create the window/renderer.
    ///
    /// Errors:
    /// - `VideoInitFailed`: If SDL2 or its video subsystem fails to start
    /// - `WindowCreationFailed`: If window creation fails
    /// - `RendererCreationFailed`: If renderer creation fails
    pub fn init(config: &DriverConfig) -> DriverResult<Self> {
        log::info!("Initializing SDL2");

        let sdl_context =
            sdl2::init().map_err(|e| DriverError::VideoInitFailed(format!("SDL2 init: {}", e)))?;

        let video_subsystem = sdl_context
            .video()
            .map_err(|e| DriverError::VideoInitFailed(format!("video subsystem: {}", e)))?;

        log::info!(
            "SDL2 video driver: {}",
            video_subsystem.current_video_driver()
        );
        log::info!("Creating window: {}x{}", config.width, config.height);

        let mut window_builder = video_subsystem.window(&config.title, config.width, config.height);
        window_builder.position_centered();
        if config.fullscreen {
            window_builder.fullscreen_desktop();
        }
        let window = window_builder
            .build()
            .map_err(|e| DriverError::WindowCreationFailed(e.to_string()))?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if config.vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder
            .build()
            .map_err(|e| DriverError::RendererCreationFailed(e.to_string()))?;

        log::info!("SDL2 renderer: {}", canvas.info().name);

        let texture_creator = canvas.texture_creator();

        let event_pump = sdl_context
            .event_pump()
            .map_err(|e| DriverError::VideoInitFailed(format!("event pump: {}", e)))?;

        log::info!("SDL2 driver initialized successfully");
        Ok(Self {
            textures: HashMap::new(),
            next_texture_id: 1,
            texture_creator,
            canvas,
            event_pump,
            config: config.clone(),
            _video_subsystem: video_subsystem,
            _sdl_context: sdl_context,
        })
    }

    fn texture_mut(&mut self, handle: TextureHandle) -> DriverResult<&mut SdlTexture> {
        self.textures
            .get_mut(&handle)
            .ok_or(DriverError::InvalidTexture(handle))
    }
}

impl Drop for SdlDriver {
    fn drop(&mut self) {
        if !self.textures.is_empty() {
            log::debug!(
                "SdlDriver dropping, releasing {} textures",
                self.textures.len()
            );
        }
        for (_, texture) in self.textures.drain() {
            // SAFETY: the renderer that created the texture is still alive;
            // `canvas` is dropped after this function returns.
            unsafe { texture.destroy() };
        }
    }
}

fn to_sdl_rect(rect: Rect) -> SdlRect {
    SdlRect::new(rect.x, rect.y, rect.w, rect.h)
}

fn to_sdl_point(point: Point) -> SdlPoint {
    SdlPoint::new(point.x, point.y)
}

fn to_sdl_blend_mode(mode: BlendMode) -> SdlBlendMode {
    match mode {
        BlendMode::None => SdlBlendMode::None,
        BlendMode::Blend => SdlBlendMode::Blend,
        BlendMode::Add => SdlBlendMode::Add,
        BlendMode::Mod => SdlBlendMode::Mod,
    }
}

/// Map a virtual key to [`Key`]. Keycodes follow the keyboard layout, so
/// letters are the ones printed on the keys.
fn key_from_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Escape => Key::Escape,
        other => {
            let name = other.name();
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Key::Char(c.to_ascii_lowercase()),
                _ => Key::Other,
            }
        }
    }
}

/// Physical key currently producing `key`. Letters go through the active
/// layout; arrows and Escape are fixed.
fn scancode_from_key(key: Key) -> Option<Scancode> {
    match key {
        Key::Up => Some(Scancode::Up),
        Key::Down => Some(Scancode::Down),
        Key::Left => Some(Scancode::Left),
        Key::Right => Some(Scancode::Right),
        Key::Escape => Some(Scancode::Escape),
        Key::Char(c) => Keycode::from_name(&c.to_ascii_uppercase().to_string())
            .and_then(Scancode::from_keycode),
        Key::Other => None,
    }
}

impl GraphicsDriver for SdlDriver {
    fn create_texture(&mut self, pixels: &Pixmap) -> DriverResult<TextureHandle> {
        let mut texture = self
            .texture_creator
            .create_texture_static(RGBA_PIXEL_FORMAT, pixels.width(), pixels.height())
            .map_err(|e| DriverError::TextureCreationFailed(e.to_string()))?;

        if let Err(e) = texture.update(None, pixels.data(), pixels.pitch()) {
            // SAFETY: freshly created by our renderer and never handed out.
            unsafe { texture.destroy() };
            return Err(DriverError::TextureCreationFailed(format!(
                "texture update: {}",
                e
            )));
        }

        let handle = TextureHandle::new(self.next_texture_id);
        self.next_texture_id += 1;
        self.textures.insert(handle, texture);

        log::debug!(
            "Created texture {} ({}x{})",
            handle.id(),
            pixels.width(),
            pixels.height()
        );
        Ok(handle)
    }

    fn destroy_texture(&mut self, handle: TextureHandle) -> bool {
        match self.textures.remove(&handle) {
            Some(texture) => {
                // SAFETY: the renderer that created the texture is still alive.
                unsafe { texture.destroy() };
                true
            }
            None => false,
        }
    }

    fn live_textures(&self) -> usize {
        self.textures.len()
    }

    fn set_texture_color_mod(&mut self, handle: TextureHandle, color: Color) -> DriverResult<()> {
        self.texture_mut(handle)?
            .set_color_mod(color.r, color.g, color.b);
        Ok(())
    }

    fn set_texture_alpha_mod(&mut self, handle: TextureHandle, alpha: u8) -> DriverResult<()> {
        self.texture_mut(handle)?.set_alpha_mod(alpha);
        Ok(())
    }

    fn set_texture_blend_mode(
        &mut self,
        handle: TextureHandle,
        mode: BlendMode,
    ) -> DriverResult<()> {
        self.texture_mut(handle)?
            .set_blend_mode(to_sdl_blend_mode(mode));
        Ok(())
    }

    fn copy_texture(&mut self, handle: TextureHandle, request: &CopyRequest) -> DriverResult<()> {
        let texture = self
            .textures
            .get(&handle)
            .ok_or(DriverError::InvalidTexture(handle))?;

        self.canvas
            .copy_ex(
                texture,
                request.src.map(to_sdl_rect),
                request.dst.map(to_sdl_rect),
                request.angle,
                request.center.map(to_sdl_point),
                request.flip.horizontal(),
                request.flip.vertical(),
            )
            .map_err(|e| DriverError::DrawFailed(format!("render copy: {}", e)))
    }

    fn set_draw_color(&mut self, color: Color) {
        self.canvas
            .set_draw_color(SdlColor::RGBA(color.r, color.g, color.b, color.a));
    }

    fn clear(&mut self) -> DriverResult<()> {
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> DriverResult<()> {
        self.canvas
            .fill_rect(to_sdl_rect(rect))
            .map_err(|e| DriverError::DrawFailed(format!("fill rect: {}", e)))
    }

    fn draw_rect(&mut self, rect: Rect) -> DriverResult<()> {
        self.canvas
            .draw_rect(to_sdl_rect(rect))
            .map_err(|e| DriverError::DrawFailed(format!("draw rect: {}", e)))
    }

    fn draw_line(&mut self, from: Point, to: Point) -> DriverResult<()> {
        self.canvas
            .draw_line(to_sdl_point(from), to_sdl_point(to))
            .map_err(|e| DriverError::DrawFailed(format!("draw line: {}", e)))
    }

    fn draw_point(&mut self, point: Point) -> DriverResult<()> {
        self.canvas
            .draw_point(to_sdl_point(point))
            .map_err(|e| DriverError::DrawFailed(format!("draw point: {}", e)))
    }

    fn set_viewport(&mut self, viewport: Option<Rect>) -> DriverResult<()> {
        self.canvas.set_viewport(viewport.map(to_sdl_rect));
        Ok(())
    }

    fn present(&mut self) -> DriverResult<()> {
        self.canvas.present();
        Ok(())
    }

    /// Poll for pending events.
    fn poll_events(&mut self) -> DriverResult<Vec<GraphicsEvent>> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            let event = match event {
                Event::Quit { .. } => GraphicsEvent::Quit,
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => GraphicsEvent::KeyDown(key_from_keycode(keycode)),
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => GraphicsEvent::KeyUp(key_from_keycode(keycode)),
                Event::MouseMotion { x, y, .. } => GraphicsEvent::MouseMotion { x, y },
                Event::MouseButtonDown { x, y, .. } => GraphicsEvent::MouseButtonDown { x, y },
                Event::MouseButtonUp { x, y, .. } => GraphicsEvent::MouseButtonUp { x, y },
                Event::Window { win_event, .. } => {
                    match win_event {
                        sdl2::event::WindowEvent::Resized(w, h) => {
                            log::info!("Window resized to {}x{}", w, h);
                        }
                        sdl2::event::WindowEvent::FocusGained => {
                            log::debug!("Window focus gained");
                        }
                        sdl2::event::WindowEvent::FocusLost => {
                            log::debug!("Window focus lost");
                        }
                        _ => {}
                    }
                    GraphicsEvent::WindowEvent
                }
                _ => GraphicsEvent::Unknown,
            };
            events.push(event);
        }

        Ok(events)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        scancode_from_key(key)
            .map(|scancode| self.event_pump.keyboard_state().is_scancode_pressed(scancode))
            .unwrap_or(false)
    }

    fn output_size(&self) -> (u32, u32) {
        self.canvas
            .output_size()
            .unwrap_or((self.config.width, self.config.height))
    }
}
