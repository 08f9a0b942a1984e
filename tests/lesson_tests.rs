//! Whole lessons run against the headless driver with generated assets.

mod common;

use std::path::Path;

use common::{write_image, BlockFont, GLYPH_HEIGHT, GLYPH_WIDTH};
use sdl_lessons::graphics::headless::DrawCall;
use sdl_lessons::graphics::{
    BlendMode, Color, Flip, GraphicsDriver, GraphicsEvent, HeadlessDriver, Key, Point, Rect,
    TextureHandle,
};
use sdl_lessons::lessons::fonts::{FontsLesson, TEXT};
use sdl_lessons::lessons::{load_lesson, run_lesson, LessonKind};
use tempfile::TempDir;

/// Asset directory holding every image the lessons load.
fn lesson_assets() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();

    for stem in ["press", "up", "down", "left", "right"] {
        write_image(path, &format!("{}.bmp", stem), 64, 48, Color::GREEN);
        write_image(path, &format!("{}.png", stem), 64, 48, Color::BLUE);
    }
    write_image(path, "loaded.png", 640, 480, Color::RED);
    write_image(path, "texture.png", 320, 240, Color::GREEN);
    write_image(path, "viewport.png", 320, 240, Color::BLUE);
    write_image(path, "background.png", 640, 480, Color::WHITE);
    write_image(path, "foo.png", 64, 205, Color::CYAN);
    write_image(path, "dots.png", 200, 200, Color::RED);
    write_image(path, "colors.png", 640, 480, Color::WHITE);
    write_image(path, "fadein.png", 640, 480, Color::BLACK);
    write_image(path, "fadeout.png", 640, 480, Color::WHITE);
    write_image(path, "arrow.png", 120, 80, Color::BLACK);
    write_image(path, "button.png", 300, 800, Color::GREEN);

    dir
}

fn run(
    kind: LessonKind,
    assets: &Path,
    driver: &mut HeadlessDriver,
    frames: Option<u64>,
) -> u64 {
    let mut lesson = load_lesson(kind, driver, assets).unwrap();
    run_lesson(driver, lesson.as_mut(), frames).unwrap()
}

#[test]
fn test_every_image_lesson_runs_and_cleans_up() {
    let assets = lesson_assets();
    for kind in LessonKind::ALL {
        if kind == LessonKind::Fonts {
            continue;
        }
        let mut driver = HeadlessDriver::new(640, 480);
        assert_eq!(run(kind, assets.path(), &mut driver, Some(2)), 2, "{}", kind);
        assert_eq!(driver.frames_presented(), 2, "{}", kind);
        assert_eq!(driver.live_textures(), 0, "{} leaked textures", kind);
        assert_eq!(
            driver.last_frame().first(),
            Some(&DrawCall::Clear(Color::WHITE)),
            "{}",
            kind
        );
    }
}

#[test]
fn test_missing_asset_fails_to_load() {
    let empty = tempfile::tempdir().unwrap();
    let mut driver = HeadlessDriver::new(640, 480);
    assert!(load_lesson(LessonKind::LoadImage, &mut driver, empty.path()).is_err());
    assert!(load_lesson(LessonKind::KeyPresses, &mut driver, empty.path()).is_err());
}

#[test]
fn test_quit_event_ends_run() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    driver.queue_events(vec![]);
    driver.queue_events(vec![GraphicsEvent::Quit]);

    assert_eq!(run(LessonKind::Geometry, assets.path(), &mut driver, None), 1);
}

#[test]
fn test_escape_ends_run() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    driver.queue_events(vec![GraphicsEvent::KeyDown(Key::Escape)]);

    assert_eq!(run(LessonKind::Textures, assets.path(), &mut driver, None), 0);
    assert_eq!(driver.live_textures(), 0);
}

#[test]
fn test_geometry_draws_shapes() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    run(LessonKind::Geometry, assets.path(), &mut driver, Some(1));

    let frame = driver.last_frame();
    assert!(frame.contains(&DrawCall::FillRect(Rect::new(160, 120, 320, 240), Color::RED)));
    assert!(frame.contains(&DrawCall::DrawRect(Rect::new(106, 80, 426, 320), Color::GREEN)));
    assert!(frame.contains(&DrawCall::Line(
        Point::new(0, 240),
        Point::new(640, 240),
        Color::BLUE
    )));
    let points = frame
        .iter()
        .filter(|call| matches!(call, DrawCall::Point(_, Color::YELLOW)))
        .count();
    assert_eq!(points, 120);
}

#[test]
fn test_viewport_lesson_resets_viewport() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    run(LessonKind::Viewport, assets.path(), &mut driver, Some(1));

    let viewports: Vec<Option<Rect>> = driver
        .last_frame()
        .iter()
        .filter_map(|call| match call {
            DrawCall::Viewport(viewport) => Some(*viewport),
            _ => None,
        })
        .collect();
    assert_eq!(
        viewports,
        vec![
            Some(Rect::new(0, 0, 320, 240)),
            Some(Rect::new(320, 0, 320, 240)),
            Some(Rect::new(0, 240, 640, 240)),
            None,
        ]
    );
    assert_eq!(driver.last_frame_copies().len(), 3);
}

#[test]
fn test_key_presses_switch_image() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    let mut lesson = load_lesson(LessonKind::KeyPresses, &mut driver, assets.path()).unwrap();

    run_lesson(&mut driver, lesson.as_mut(), Some(1)).unwrap();
    let default_handle = driver.last_frame_copies()[0].0;

    let mut lesson = load_lesson(LessonKind::KeyPresses, &mut driver, assets.path()).unwrap();
    driver.queue_events(vec![GraphicsEvent::KeyDown(Key::Up)]);
    run_lesson(&mut driver, lesson.as_mut(), Some(1)).unwrap();
    let up_handle = driver.last_frame_copies()[0].0;

    // Handles are handed out in load order: press, up, down, left, right.
    assert_eq!(up_handle.id(), default_handle.id() + 5 + 1);
}

#[test]
fn test_key_states_follow_held_keys() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    let mut lesson = load_lesson(LessonKind::KeyStates, &mut driver, assets.path()).unwrap();

    driver.press_key(Key::Left);
    driver.press_key(Key::Down);
    run_lesson(&mut driver, lesson.as_mut(), Some(1)).unwrap();

    // Third texture loaded is the "down" image.
    assert_eq!(driver.last_frame_copies()[0].0.id(), 3);
}

#[test]
fn test_color_keying_positions() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    run(LessonKind::ColorKeying, assets.path(), &mut driver, Some(1));

    let copies = driver.last_frame_copies();
    assert_eq!(copies[0].1.dst, Some(Rect::new(0, 0, 640, 480)));
    assert_eq!(copies[1].1.dst, Some(Rect::new(250, 200, 64, 205)));
}

#[test]
fn test_sprite_sheet_corners() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    run(LessonKind::SpriteSheets, assets.path(), &mut driver, Some(1));

    let copies = driver.last_frame_copies();
    let placed: Vec<(Option<Rect>, Option<Rect>)> =
        copies.iter().map(|(_, req)| (req.src, req.dst)).collect();
    assert_eq!(
        placed,
        vec![
            (Some(Rect::new(0, 0, 100, 100)), Some(Rect::new(0, 0, 100, 100))),
            (Some(Rect::new(100, 0, 100, 100)), Some(Rect::new(540, 0, 100, 100))),
            (Some(Rect::new(0, 100, 100, 100)), Some(Rect::new(0, 380, 100, 100))),
            (Some(Rect::new(100, 100, 100, 100)), Some(Rect::new(540, 380, 100, 100))),
        ]
    );
}

#[test]
fn test_rotation_keys_change_copy() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    driver.queue_events(vec![
        GraphicsEvent::KeyDown(Key::Char('d')),
        GraphicsEvent::KeyDown(Key::Char('d')),
        GraphicsEvent::KeyDown(Key::Char('e')),
    ]);
    run(LessonKind::Rotation, assets.path(), &mut driver, Some(1));

    let (_, request) = driver.last_frame_copies()[0];
    assert_eq!(request.angle, 120.0);
    assert_eq!(request.flip, Flip::Vertical);
    assert_eq!(request.dst, Some(Rect::new(260, 200, 120, 80)));
}

#[test]
fn test_mouse_events_pick_clips() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    driver.queue_events(vec![
        GraphicsEvent::MouseMotion { x: 10, y: 10 },
        GraphicsEvent::MouseButtonDown { x: 630, y: 470 },
    ]);
    run(LessonKind::MouseEvents, assets.path(), &mut driver, Some(1));

    let clips: Vec<Option<Rect>> = driver
        .last_frame_copies()
        .iter()
        .map(|(_, req)| req.src)
        .collect();
    assert_eq!(
        clips,
        vec![
            Some(Rect::new(0, 0, 300, 200)),
            Some(Rect::new(0, 0, 300, 200)),
            Some(Rect::new(0, 0, 300, 200)),
            Some(Rect::new(0, 400, 300, 200)),
        ]
    );
}

#[test]
fn test_mouse_motion_highlights_button() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    driver.queue_events(vec![GraphicsEvent::MouseMotion { x: 10, y: 10 }]);
    run(LessonKind::MouseEvents, assets.path(), &mut driver, Some(1));

    let copies = driver.last_frame_copies();
    assert_eq!(copies[0].1.src, Some(Rect::new(0, 200, 300, 200)));
    assert_eq!(copies[0].1.dst, Some(Rect::new(0, 0, 300, 200)));
}

#[test]
fn test_alpha_blending_modulates_front() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    let mut lesson = load_lesson(LessonKind::AlphaBlending, &mut driver, assets.path()).unwrap();
    // Uploads happen in order: background, then front.
    let front = TextureHandle::new(2);

    lesson.draw(&mut driver).unwrap();
    assert_eq!(driver.texture(front).unwrap().alpha_mod, 255);
    assert_eq!(driver.texture(front).unwrap().blend_mode, BlendMode::Blend);

    lesson.handle_event(&GraphicsEvent::KeyDown(Key::Char('s')));
    lesson.handle_event(&GraphicsEvent::KeyDown(Key::Char('s')));
    lesson.draw(&mut driver).unwrap();
    assert_eq!(driver.texture(front).unwrap().alpha_mod, 191);

    lesson.close(&mut driver);
    assert_eq!(driver.live_textures(), 0);
}

#[test]
fn test_color_modulation_tints_texture() {
    let assets = lesson_assets();
    let mut driver = HeadlessDriver::new(640, 480);
    let mut lesson = load_lesson(LessonKind::ColorModulation, &mut driver, assets.path()).unwrap();
    let handle = TextureHandle::new(1);

    lesson.handle_event(&GraphicsEvent::KeyDown(Key::Char('q')));
    lesson.handle_event(&GraphicsEvent::KeyDown(Key::Char('d')));
    lesson.draw(&mut driver).unwrap();
    assert_eq!(
        driver.texture(handle).unwrap().color_mod,
        Color::rgb(32, 0, 224)
    );

    lesson.close(&mut driver);
}

#[test]
fn test_fonts_lesson_centers_text() {
    let mut driver = HeadlessDriver::new(640, 480);
    let mut lesson = FontsLesson::load(&mut driver, &BlockFont).unwrap();
    assert!(lesson.text().is_loaded());

    run_lesson(&mut driver, &mut lesson, Some(1)).unwrap();

    let width = TEXT.len() as u32 * GLYPH_WIDTH;
    let expected = Rect::new(
        (640 - width as i32) / 2,
        (480 - GLYPH_HEIGHT as i32) / 2,
        width,
        GLYPH_HEIGHT,
    );
    assert_eq!(driver.last_frame_copies()[0].1.dst, Some(expected));
    assert_eq!(driver.live_textures(), 0);
}
