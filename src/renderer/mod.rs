//! Frame rendering
//!
//! Rendering is a stateless mapping from `GameState` to draw calls on a
//! `Canvas`. The canvas is whatever surface the platform provides.

pub mod hud;

use glam::IVec2;

use crate::platform::PlatformError;
use crate::settings::Settings;
use crate::sim::{Ball, GameState, Paddle, Rect};

pub use hud::{INSTRUCTIONS, TextLine, hud_lines, score_text};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
    pub const PADDLE: Color = Color::rgb(255, 255, 255);
    pub const BALL: Color = Color::rgb(255, 0, 0);
    pub const SCORE_TEXT: Color = Color::rgb(255, 255, 255);
    pub const INSTRUCTION_TEXT: Color = Color::rgb(128, 128, 128);
}

/// Drawing surface provided by the platform
///
/// Draw calls are buffered; nothing is visible until `present`.
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill the ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);

    /// Rendered width in pixels of `text` at `font_size`
    fn text_width(&self, text: &str, font_size: u16) -> i32;

    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: IVec2, font_size: u16, color: Color);

    /// Show the finished frame
    fn present(&mut self) -> Result<(), PlatformError>;
}

pub fn draw_paddle<C: Canvas + ?Sized>(canvas: &mut C, paddle: &Paddle) {
    canvas.fill_rect(paddle.rect, colors::PADDLE);
}

pub fn draw_ball<C: Canvas + ?Sized>(canvas: &mut C, ball: &Ball) {
    canvas.fill_ellipse(ball.rect, colors::BALL);
}

/// Draw one complete frame and present it
pub fn render_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &GameState,
    settings: &Settings,
) -> Result<(), PlatformError> {
    canvas.clear(colors::BACKGROUND);

    draw_paddle(canvas, &state.left_paddle);
    draw_paddle(canvas, &state.right_paddle);
    draw_ball(canvas, &state.ball);

    for line in hud_lines(&*canvas, &state.score, settings) {
        canvas.draw_text(&line.text, line.pos, line.font_size, line.color);
    }

    canvas.present()
}
