//! Conway's Game of Life in the terminal.
//!
//! A fixed 20x40 board evolves under B3/S23. The user picks a seed pattern,
//! starts, pauses and resets the run, and toggles a grid overlay, all from
//! the keyboard.
//!
//! - [`grid`] - board model and the generation engine
//! - [`patterns`] - named seed patterns
//! - [`app`] - Start / Running / Paused state machine
//! - [`ui`] - diff-aware renderer
//! - [`input`] - key and resize mapping
//! - [`terminal`] - crossterm and scripted backends
//! - [`session`] - the tick loop

pub mod app;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod logging;
pub mod patterns;
pub mod session;
pub mod terminal;
pub mod ui;

pub use app::{Flow, GameOfLife, Mode};
pub use config::Config;
pub use error::LifeError;
pub use grid::{step, Cell, Grid, COLS, ROWS};
pub use input::Command;
pub use patterns::{Pattern, PATTERNS};
pub use terminal::{CrosstermTerminal, ScriptedTerminal, Terminal};
pub use ui::{Renderer, Style, Surface};
