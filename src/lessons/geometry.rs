//! Primitive drawing: a filled quad, an outlined quad, a line and a dotted
//! vertical line, all sized from the render target.

use anyhow::Result;

use crate::graphics::common::{Color, GraphicsDriver, Point, Rect};
use crate::graphics::texture::Texture;
use crate::lessons::Lesson;

/// Spacing of the dotted vertical line.
const DOT_SPACING: usize = 4;

#[derive(Debug, Default)]
pub struct GeometryLesson;

impl GeometryLesson {
    pub fn new() -> Self {
        Self
    }
}

pub fn filled_quad(width: u32, height: u32) -> Rect {
    Rect::new((width / 4) as i32, (height / 4) as i32, width / 2, height / 2)
}

pub fn outlined_quad(width: u32, height: u32) -> Rect {
    Rect::new(
        (width / 6) as i32,
        (height / 6) as i32,
        width * 2 / 3,
        height * 2 / 3,
    )
}

impl Lesson for GeometryLesson {
    fn draw(&mut self, driver: &mut dyn GraphicsDriver) -> Result<()> {
        let (width, height) = driver.output_size();

        driver.set_draw_color(Color::RED);
        driver.fill_rect(filled_quad(width, height))?;

        driver.set_draw_color(Color::GREEN);
        driver.draw_rect(outlined_quad(width, height))?;

        let middle_y = (height / 2) as i32;
        driver.set_draw_color(Color::BLUE);
        driver.draw_line(Point::new(0, middle_y), Point::new(width as i32, middle_y))?;

        let middle_x = (width / 2) as i32;
        driver.set_draw_color(Color::YELLOW);
        for y in (0..height as i32).step_by(DOT_SPACING) {
            driver.draw_point(Point::new(middle_x, y))?;
        }

        Ok(())
    }

    fn textures_mut(&mut self) -> Vec<&mut Texture> {
        Vec::new()
    }
}
