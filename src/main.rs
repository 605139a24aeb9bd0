//! Duo Pong entry point
//!
//! Takes over the terminal and runs the game loop until Esc or Ctrl-C.

use anyhow::Context;

use duo_pong::platform::TerminalPlatform;
use duo_pong::renderer::score_text;
use duo_pong::{Game, Settings};

fn main() -> anyhow::Result<()> {
    // Anything chattier than warnings would scribble over the frame; use RUST_LOG
    // with stderr redirected to see more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::load();
    settings.validate().context("invalid settings")?;

    let seed: u64 = rand::random();
    log::info!("Duo Pong starting (seed {seed})");

    let platform = TerminalPlatform::open(&settings).context("failed to set up the terminal")?;
    let state = Game::new(platform, settings, seed)
        .run()
        .context("game loop failed")?;

    println!("{}", score_text(&state.score));
    Ok(())
}
