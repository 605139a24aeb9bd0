//! Platform abstraction layer
//!
//! Everything the game needs from the outside world:
//! - A fixed-size drawing surface (`renderer::Canvas`)
//! - Per-tick input: quit flag and held keys
//! - Frame pacing
//!
//! The shipped platform is a terminal driven through crossterm.

pub mod clock;
pub mod keys;
pub mod raster;
pub mod terminal;

use thiserror::Error;

use crate::renderer::Canvas;
use crate::sim::TickInput;

pub use clock::FrameClock;
pub use keys::{HoldMode, KeyTracker, LogicalKey};
pub use raster::CellGrid;
pub use terminal::TerminalPlatform;

/// Fatal platform failures. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("terminal is {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}

/// A surface plus the input source that goes with it
pub trait Platform: Canvas {
    /// Drain pending input and report the state for this tick
    fn poll_input(&mut self) -> Result<TickInput, PlatformError>;
}
