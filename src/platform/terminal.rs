//! Terminal platform backed by crossterm
//!
//! Owns the terminal for the lifetime of the game: raw mode, alternate screen,
//! hidden cursor and (when supported) key release reporting. Everything is
//! restored on drop, including on the error path.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor, event,
    event::{
        DisableFocusChange, EnableFocusChange, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue, style, terminal,
};
use glam::IVec2;

use super::keys::{HoldMode, KeyTracker};
use super::raster::CellGrid;
use super::{Platform, PlatformError};
use crate::renderer::{Canvas, Color};
use crate::settings::Settings;
use crate::sim::{Rect, TickInput};

/// Smallest terminal the playfield is still recognisable in
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

/// The game surface drawn into the controlling terminal
pub struct TerminalPlatform {
    out: Stdout,
    grid: CellGrid,
    keys: KeyTracker,
    keyboard_enhanced: bool,
}

impl TerminalPlatform {
    /// Take over the terminal and size the surface to fit it
    pub fn open(settings: &Settings) -> Result<Self, PlatformError> {
        let (cols, rows) = terminal::size()?;
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(PlatformError::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }

        let grid = CellGrid::fit(settings.screen_width, settings.screen_height, cols, rows);
        let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        let mode = if keyboard_enhanced {
            HoldMode::UntilRelease
        } else {
            log::warn!(
                "terminal does not report key releases; holding keys for {} ticks per press",
                settings.key_hold_ticks
            );
            HoldMode::Ticks(settings.key_hold_ticks)
        };

        terminal::enable_raw_mode()?;
        // From here on Drop puts the terminal back
        let mut platform = Self {
            out: io::stdout(),
            grid,
            keys: KeyTracker::new(mode),
            keyboard_enhanced,
        };

        execute!(
            platform.out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(&settings.caption),
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
            EnableFocusChange
        )?;
        if keyboard_enhanced {
            execute!(
                platform.out,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
        }

        log::info!(
            "terminal surface {}x{} cells, {}x{} px per sub-pixel",
            platform.grid.cols(),
            platform.grid.rows(),
            platform.grid.pitch().x,
            platform.grid.pitch().y
        );
        Ok(platform)
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.keys.handle(&key),
            Event::FocusLost => self.keys.release_all(),
            Event::Resize(cols, rows) => self.resize(cols, rows),
            _ => {}
        }
    }

    /// Refit the surface so rows never wrap; the next frame repaints everything
    fn resize(&mut self, cols: u16, rows: u16) {
        self.grid.resize(cols, rows);
        log::debug!(
            "terminal resized to {cols}x{rows}; surface now {}x{} cells",
            self.grid.cols(),
            self.grid.rows()
        );
        // Stale cells outside the grid would otherwise linger
        if let Err(err) = queue!(self.out, terminal::Clear(terminal::ClearType::All)) {
            log::warn!("failed to clear terminal after resize: {err}");
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.keyboard_enhanced {
            execute!(self.out, PopKeyboardEnhancementFlags)?;
        }
        execute!(
            self.out,
            style::ResetColor,
            DisableFocusChange,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::error!("failed to restore terminal: {err}");
        }
    }
}

impl Canvas for TerminalPlatform {
    fn clear(&mut self, color: Color) {
        self.grid.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.grid.fill_rect(rect, color);
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        self.grid.fill_ellipse(bounds, color);
    }

    fn text_width(&self, text: &str, _font_size: u16) -> i32 {
        self.grid.text_width(text)
    }

    fn draw_text(&mut self, text: &str, pos: IVec2, _font_size: u16, color: Color) {
        self.grid.draw_text(text, pos, color);
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        queue!(self.out, terminal::BeginSynchronizedUpdate)?;
        self.grid.write_to(&mut self.out)?;
        queue!(self.out, terminal::EndSynchronizedUpdate)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Platform for TerminalPlatform {
    fn poll_input(&mut self) -> Result<TickInput, PlatformError> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(self.keys.snapshot())
    }
}
