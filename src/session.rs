//! The cooperative tick loop.
//!
//! One pass per tick, always in this order: sleep for the mode's cadence,
//! simulate (or idle), render, then handle at most one pending event.

use std::time::Duration;

use rand::Rng;

use crate::app::{Flow, GameOfLife};
use crate::config::Config;
use crate::error::LifeError;
use crate::input::Command;
use crate::terminal::Terminal;
use crate::ui::Renderer;

/// Runs until a quit command arrives.
pub async fn run<T, R>(terminal: &mut T, game: &mut GameOfLife<R>, config: &Config) -> Result<(), LifeError>
where
    T: Terminal + ?Sized,
    R: Rng,
{
    let mut renderer = Renderer::new();
    loop {
        tokio::time::sleep(game.cadence(config)).await;
        game.tick();
        renderer.render(terminal, game)?;

        if !terminal.poll(Duration::ZERO)? {
            continue;
        }
        let event = terminal.read_event()?;
        let Some(command) = Command::from_event(&event) else {
            continue;
        };
        match game.handle(command) {
            Flow::Continue => {}
            Flow::Redraw => {
                terminal.sync()?;
                renderer.invalidate();
                tracing::debug!(size = ?terminal.size()?, "terminal resized");
            }
            Flow::Quit => {
                tracing::info!(generation = game.generation, mode = %game.mode, "quit requested");
                return Ok(());
            }
        }
    }
}
