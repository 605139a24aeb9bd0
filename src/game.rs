//! Frame controller
//!
//! One tick is: poll input, advance the simulation, render, then wait for the
//! next tick boundary. A quit request seen while polling lets the current
//! tick finish (including its frame) and then ends the loop.

use crate::platform::{FrameClock, Platform, PlatformError};
use crate::renderer::render_frame;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// A running game bound to a platform
pub struct Game<P: Platform> {
    state: GameState,
    settings: Settings,
    platform: P,
    clock: FrameClock,
    running: bool,
}

impl<P: Platform> Game<P> {
    pub fn new(platform: P, settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::with_settings(&settings, seed),
            clock: FrameClock::new(settings.tick_rate),
            settings,
            platform,
            running: true,
        }
    }

    /// Run one tick without pacing
    pub fn step(&mut self) -> Result<Vec<GameEvent>, PlatformError> {
        let input = self.platform.poll_input()?;
        if input.quit && self.running {
            log::info!("quit requested at tick {}", self.state.time_ticks + 1);
            self.running = false;
        }

        let events = tick(&mut self.state, &input);
        render_frame(&mut self.platform, &self.state, &self.settings)?;

        Ok(events)
    }

    /// Loop until quit, returning the final state. The platform is dropped
    /// (and the terminal released) before this returns.
    pub fn run(mut self) -> Result<GameState, PlatformError> {
        log::info!(
            "starting game loop at {} ticks/s (seed {})",
            self.settings.tick_rate,
            self.state.seed
        );
        let slow_frame = self.clock.interval() * 2;

        while self.running {
            self.step()?;
            if self.running {
                let elapsed = self.clock.wait();
                if elapsed > slow_frame {
                    log::trace!("slow frame: {elapsed:?}");
                }
            }
        }

        log::info!(
            "game over after {} ticks, final score {} - {}",
            self.state.time_ticks,
            self.state.score.left,
            self.state.score.right
        );
        Ok(self.state)
    }
}
