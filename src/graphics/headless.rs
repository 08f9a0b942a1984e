//! Headless graphics driver.
//!
//! Keeps textures as plain [`Pixmap`]s and records every draw call instead of
//! rasterizing. Input is scripted: each [`HeadlessDriver::queue_events`] call
//! is returned by one [`poll_events`](GraphicsDriver::poll_events). Used by the
//! test suite and by `--headless` runs on machines without a display.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graphics::common::{
    BlendMode, Color, CopyRequest, DriverConfig, DriverError, DriverResult, GraphicsDriver,
    GraphicsEvent, Key, Point, Rect, TextureHandle,
};
use crate::graphics::pixmap::Pixmap;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Copy {
        handle: TextureHandle,
        request: CopyRequest,
    },
    FillRect(Rect, Color),
    DrawRect(Rect, Color),
    Line(Point, Point, Color),
    Point(Point, Color),
    Viewport(Option<Rect>),
}

/// Driver-side state of one texture.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessTexture {
    pub pixels: Pixmap,
    pub color_mod: Color,
    pub alpha_mod: u8,
    pub blend_mode: BlendMode,
}

/// In-memory driver with scripted input.
#[derive(Debug)]
pub struct HeadlessDriver {
    width: u32,
    height: u32,
    next_texture_id: u32,
    textures: HashMap<TextureHandle, HeadlessTexture>,
    textures_created: u64,
    draw_color: Color,
    frame: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames_presented: u64,
    pending_events: VecDeque<Vec<GraphicsEvent>>,
    pressed_keys: HashSet<Key>,
    fail_uploads: bool,
}

impl HeadlessDriver {
    /// Create a driver with a `width` x `height` target.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            next_texture_id: 1,
            textures: HashMap::new(),
            textures_created: 0,
            draw_color: Color::WHITE,
            frame: Vec::new(),
            last_frame: Vec::new(),
            frames_presented: 0,
            pending_events: VecDeque::new(),
            pressed_keys: HashSet::new(),
            fail_uploads: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &DriverConfig) -> Self {
        log::info!(
            "Headless driver: {}x{} \"{}\"",
            config.width,
            config.height,
            config.title
        );
        Self::new(config.width, config.height)
    }

    /// Queue a batch of events returned by the next poll.
    pub fn queue_events(&mut self, events: Vec<GraphicsEvent>) {
        self.pending_events.push_back(events);
    }

    /// Mark `key` as held in the keyboard state.
    pub fn press_key(&mut self, key: Key) {
        self.pressed_keys.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.pressed_keys.remove(&key);
    }

    /// Make every following upload fail.
    pub fn set_fail_uploads(&mut self, fail: bool) {
        self.fail_uploads = fail;
    }

    /// Driver-side state of a live texture.
    pub fn texture(&self, handle: TextureHandle) -> Option<&HeadlessTexture> {
        self.textures.get(&handle)
    }

    /// Calls recorded since the last present.
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.frame
    }

    /// Calls of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    /// Texture copies of the most recently presented frame.
    pub fn last_frame_copies(&self) -> Vec<(TextureHandle, CopyRequest)> {
        self.last_frame
            .iter()
            .filter_map(|call| match call {
                DrawCall::Copy { handle, request } => Some((*handle, *request)),
                _ => None,
            })
            .collect()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Total number of successful uploads over the driver's lifetime.
    pub fn textures_created(&self) -> u64 {
        self.textures_created
    }

    fn texture_mut(&mut self, handle: TextureHandle) -> DriverResult<&mut HeadlessTexture> {
        self.textures
            .get_mut(&handle)
            .ok_or(DriverError::InvalidTexture(handle))
    }
}

impl GraphicsDriver for HeadlessDriver {
    fn create_texture(&mut self, pixels: &Pixmap) -> DriverResult<TextureHandle> {
        if self.fail_uploads {
            return Err(DriverError::TextureCreationFailed(
                "uploads disabled".to_string(),
            ));
        }

        let handle = TextureHandle::new(self.next_texture_id);
        self.next_texture_id += 1;
        self.textures_created += 1;
        self.textures.insert(
            handle,
            HeadlessTexture {
                pixels: pixels.clone(),
                color_mod: Color::WHITE,
                alpha_mod: u8::MAX,
                blend_mode: BlendMode::None,
            },
        );
        Ok(handle)
    }

    fn destroy_texture(&mut self, handle: TextureHandle) -> bool {
        self.textures.remove(&handle).is_some()
    }

    fn live_textures(&self) -> usize {
        self.textures.len()
    }

    fn set_texture_color_mod(&mut self, handle: TextureHandle, color: Color) -> DriverResult<()> {
        self.texture_mut(handle)?.color_mod = Color::rgb(color.r, color.g, color.b);
        Ok(())
    }

    fn set_texture_alpha_mod(&mut self, handle: TextureHandle, alpha: u8) -> DriverResult<()> {
        self.texture_mut(handle)?.alpha_mod = alpha;
        Ok(())
    }

    fn set_texture_blend_mode(
        &mut self,
        handle: TextureHandle,
        mode: BlendMode,
    ) -> DriverResult<()> {
        self.texture_mut(handle)?.blend_mode = mode;
        Ok(())
    }

    fn copy_texture(&mut self, handle: TextureHandle, request: &CopyRequest) -> DriverResult<()> {
        if !self.textures.contains_key(&handle) {
            return Err(DriverError::InvalidTexture(handle));
        }
        self.frame.push(DrawCall::Copy {
            handle,
            request: *request,
        });
        Ok(())
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn clear(&mut self) -> DriverResult<()> {
        self.frame.push(DrawCall::Clear(self.draw_color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> DriverResult<()> {
        self.frame.push(DrawCall::FillRect(rect, self.draw_color));
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect) -> DriverResult<()> {
        self.frame.push(DrawCall::DrawRect(rect, self.draw_color));
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> DriverResult<()> {
        self.frame.push(DrawCall::Line(from, to, self.draw_color));
        Ok(())
    }

    fn draw_point(&mut self, point: Point) -> DriverResult<()> {
        self.frame.push(DrawCall::Point(point, self.draw_color));
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Option<Rect>) -> DriverResult<()> {
        self.frame.push(DrawCall::Viewport(viewport));
        Ok(())
    }

    fn present(&mut self) -> DriverResult<()> {
        self.last_frame = std::mem::take(&mut self.frame);
        self.frames_presented += 1;
        Ok(())
    }

    fn poll_events(&mut self) -> DriverResult<Vec<GraphicsEvent>> {
        Ok(self.pending_events.pop_front().unwrap_or_default())
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    fn output_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
