//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{paddle_hit, scoring_side};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GameState, Paddle, Playfield, Score, Side};
pub use tick::{TickInput, tick};
