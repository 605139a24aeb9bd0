//! Score and instruction text

use glam::IVec2;

use super::{Canvas, Color, colors};
use crate::centered_x;
use crate::consts::{INSTRUCTION_TEXT_BOTTOM_OFFSET, SCORE_TEXT_Y};
use crate::settings::Settings;
use crate::sim::Score;

/// Static controls reminder
pub const INSTRUCTIONS: &str = "Left: Q (up), Z (down)   Right: P (up), . (down)";

/// Score line shown at the top of the screen
pub fn score_text(score: &Score) -> String {
    format!("Left: {}    Right: {}", score.left, score.right)
}

/// A positioned line of text ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub pos: IVec2,
    pub font_size: u16,
    pub color: Color,
}

/// Lay out the HUD: score centered near the top, instructions centered near the bottom
pub fn hud_lines<C: Canvas + ?Sized>(canvas: &C, score: &Score, settings: &Settings) -> [TextLine; 2] {
    let score_line = score_text(score);
    let score_width = canvas.text_width(&score_line, settings.score_font_size);
    let instruction_width = canvas.text_width(INSTRUCTIONS, settings.instruction_font_size);

    [
        TextLine {
            pos: IVec2::new(centered_x(settings.screen_width, score_width), SCORE_TEXT_Y),
            text: score_line,
            font_size: settings.score_font_size,
            color: colors::SCORE_TEXT,
        },
        TextLine {
            text: INSTRUCTIONS.to_string(),
            pos: IVec2::new(
                centered_x(settings.screen_width, instruction_width),
                settings.screen_height - INSTRUCTION_TEXT_BOTTOM_OFFSET,
            ),
            font_size: settings.instruction_font_size,
            color: colors::INSTRUCTION_TEXT,
        },
    ]
}
