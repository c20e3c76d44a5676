//! Terminal Brick Buster runner (default binary).
//!
//! Sets up logging, takes over the terminal and runs the game loop until the
//! player quits.

use anyhow::Result;
use tracing::{error, info};

use brick_buster::engine::{GameLoop, LoopConfig};
use brick_buster::logging;
use brick_buster::terminal::TerminalPlatform;

fn main() -> Result<()> {
    logging::init()?;

    let mut platform = TerminalPlatform::new();
    platform.enter()?;
    info!(
        key_release_events = platform.keyboard_enhanced(),
        "terminal ready"
    );

    let result = run(&mut platform);

    // Always try to restore terminal state.
    let _ = platform.exit();
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    result
}

fn run(platform: &mut TerminalPlatform) -> Result<()> {
    let mut game = GameLoop::new(LoopConfig::from_env());
    game.run(platform)
}
