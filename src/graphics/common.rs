//!
//! Common types, traits, and errors shared by the graphics drivers.
//!
//! Both the SDL2 driver and the headless driver implement [`GraphicsDriver`].
//! Lessons and [`Texture`](crate::graphics::texture::Texture) only ever see the
//! trait, so the window/renderer pair is an explicit context object passed by
//! reference instead of process-wide globals.
//!

use std::fmt;

use crate::graphics::pixmap::Pixmap;

/// Default window width used by every lesson.
pub const SCREEN_WIDTH: u32 = 640;
/// Default window height used by every lesson.
pub const SCREEN_HEIGHT: u32 = 480;

/// Error types for driver operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// Video subsystem could not be brought up.
    VideoInitFailed(String),
    /// Window creation failed.
    WindowCreationFailed(String),
    /// Renderer creation failed.
    RendererCreationFailed(String),
    /// The renderer refused to create or fill a texture.
    TextureCreationFailed(String),
    /// The handle does not name a live texture.
    InvalidTexture(TextureHandle),
    /// A draw call was rejected by the renderer.
    DrawFailed(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VideoInitFailed(msg) => write!(f, "Video initialization failed: {}", msg),
            Self::WindowCreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
            Self::RendererCreationFailed(msg) => write!(f, "Renderer creation failed: {}", msg),
            Self::TextureCreationFailed(msg) => write!(f, "Texture creation failed: {}", msg),
            Self::InvalidTexture(handle) => write!(f, "Invalid texture handle: {}", handle.id()),
            Self::DrawFailed(msg) => write!(f, "Draw call failed: {}", msg),
        }
    }
}

impl std::error::Error for DriverError {}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);
    /// The transparency key used by every image lesson.
    pub const CYAN: Color = Color::rgb(0x00, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Compare only the color channels, ignoring alpha.
    pub const fn same_rgb(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle with top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Compositing rule applied when a texture is copied onto the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Source replaces destination.
    #[default]
    None,
    /// Alpha blending.
    Blend,
    /// Additive blending.
    Add,
    /// Color modulation.
    Mod,
}

/// Mirror axis for a texture copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Flip {
    pub const fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    pub const fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Opaque handle naming a texture owned by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u32);

impl TextureHandle {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }
}

/// One texture copy: source sub-rectangle, destination quad and transform.
///
/// `dst == None` stretches the texture over the whole current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopyRequest {
    pub src: Option<Rect>,
    pub dst: Option<Rect>,
    /// Clockwise rotation in degrees.
    pub angle: f64,
    /// Rotation pivot relative to `dst`; `None` means the center of `dst`.
    pub center: Option<Point>,
    pub flip: Flip,
}

impl CopyRequest {
    /// Plain copy with no rotation or flip.
    pub const fn plain(src: Option<Rect>, dst: Option<Rect>) -> Self {
        Self {
            src,
            dst,
            angle: 0.0,
            center: None,
            flip: Flip::None,
        }
    }
}

/// Layout-independent key identifiers the lessons react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    /// A letter key, always lowercase.
    Char(char),
    Other,
}

/// Wrapper for SDL2 events to avoid exposing sdl2's event type directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsEvent {
    /// Quit event (window close, quit command, etc.).
    Quit,
    /// Key press event.
    KeyDown(Key),
    /// Key release event.
    KeyUp(Key),
    /// Mouse motion event with pointer coordinates.
    MouseMotion { x: i32, y: i32 },
    /// Mouse button press at pointer coordinates.
    MouseButtonDown { x: i32, y: i32 },
    /// Mouse button release at pointer coordinates.
    MouseButtonUp { x: i32, y: i32 },
    /// Window event (resize, expose, etc.).
    WindowEvent,
    /// Unknown/other event.
    Unknown,
}

/// Driver configuration state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Window title.
    pub title: String,
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Fullscreen mode flag.
    pub fullscreen: bool,
    /// Synchronize present with the display refresh.
    pub vsync: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            title: "SDL Tutorial".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fullscreen: false,
            vsync: false,
        }
    }
}

impl DriverConfig {
    /// Create configuration for windowed mode.
    #[must_use]
    pub fn windowed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set fullscreen mode.
    #[must_use]
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Set vsync.
    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

/// Trait for graphics drivers.
///
/// A driver owns the render target and every texture created through it.
/// Handles returned by [`create_texture`](GraphicsDriver::create_texture) stay
/// valid until passed to [`destroy_texture`](GraphicsDriver::destroy_texture)
/// or until the driver itself is dropped.
///
/// All calls must happen on the thread that created the driver.
pub trait GraphicsDriver {
    /// Upload a pixel buffer as a new texture.
    fn create_texture(&mut self, pixels: &Pixmap) -> DriverResult<TextureHandle>;

    /// Release a texture. Returns `false` if the handle was not live.
    fn destroy_texture(&mut self, handle: TextureHandle) -> bool;

    /// Number of textures currently owned by the driver.
    fn live_textures(&self) -> usize;

    /// Set the RGB multiplier applied when copying `handle`.
    fn set_texture_color_mod(&mut self, handle: TextureHandle, color: Color) -> DriverResult<()>;

    /// Set the alpha multiplier applied when copying `handle`.
    fn set_texture_alpha_mod(&mut self, handle: TextureHandle, alpha: u8) -> DriverResult<()>;

    /// Set the blend mode used when copying `handle`.
    fn set_texture_blend_mode(&mut self, handle: TextureHandle, mode: BlendMode)
        -> DriverResult<()>;

    /// Copy (part of) a texture onto the current target.
    fn copy_texture(&mut self, handle: TextureHandle, request: &CopyRequest) -> DriverResult<()>;

    /// Set the color used by clear and the primitive draw calls.
    fn set_draw_color(&mut self, color: Color);

    /// Fill the whole target with the draw color.
    fn clear(&mut self) -> DriverResult<()>;

    fn fill_rect(&mut self, rect: Rect) -> DriverResult<()>;

    fn draw_rect(&mut self, rect: Rect) -> DriverResult<()>;

    fn draw_line(&mut self, from: Point, to: Point) -> DriverResult<()>;

    fn draw_point(&mut self, point: Point) -> DriverResult<()>;

    /// Restrict drawing to `viewport`; `None` resets to the whole target.
    fn set_viewport(&mut self, viewport: Option<Rect>) -> DriverResult<()>;

    /// Show the finished frame.
    fn present(&mut self) -> DriverResult<()>;

    /// Drain pending input and window events.
    fn poll_events(&mut self) -> DriverResult<Vec<GraphicsEvent>>;

    /// Current keyboard state for `key`.
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Size of the render target in pixels.
    fn output_size(&self) -> (u32, u32);
}
