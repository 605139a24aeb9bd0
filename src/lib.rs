//! Duo Pong - two-player keyboard Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collision and scoring rules)
//! - `renderer`: Maps game state to draw calls on an abstract canvas
//! - `platform`: Terminal surface, keyboard state and frame pacing
//! - `game`: Frame controller tying input, simulation, rendering and pacing together
//! - `settings`: Tunable geometry and timing

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Window caption
    pub const CAPTION: &str = "Pong Game with Keyboard Controlled Paddles";

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    /// Pixels per tick while a key is held
    pub const PADDLE_SPEED: i32 = 5;
    /// Gap between a paddle and its side of the screen
    pub const PADDLE_MARGIN: i32 = 10;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 10;
    /// Magnitude of both velocity components (pixels per tick)
    pub const BALL_SPEED: i32 = 4;

    /// Font sizes for the HUD text
    pub const SCORE_FONT_SIZE: u16 = 24;
    pub const INSTRUCTION_FONT_SIZE: u16 = 18;
    /// Top of the score line
    pub const SCORE_TEXT_Y: i32 = 20;
    /// Distance from the bottom edge to the top of the instruction line
    pub const INSTRUCTION_TEXT_BOTTOM_OFFSET: i32 = 40;

    /// Ticks a key press counts as held when the terminal never reports releases
    pub const KEY_HOLD_TICKS: u32 = 8;
}

/// X coordinate that horizontally centers something `width` wide on a surface
#[inline]
pub fn centered_x(surface_width: i32, width: i32) -> i32 {
    surface_width / 2 - width / 2
}
