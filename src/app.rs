// app.rs - Application state machine driving the generation engine

use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::grid::{step, Grid};
use crate::input::Command;
use crate::patterns::{self, PATTERNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Start,
    Running,
    Paused,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Start => "Start",
            Mode::Running => "Running",
            Mode::Paused => "Paused",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the loop should do after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Layout changed; the next frame has to be drawn from scratch.
    Redraw,
    Quit,
}

/// Terminal Game of Life state. Owned by the loop, never shared.
pub struct GameOfLife<R = StdRng> {
    pub grid: Grid,
    pub mode: Mode,
    pub generation: u64,
    pub pattern_index: usize,
    pub show_grid: bool,
    rng: R,
}

impl GameOfLife<StdRng> {
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config.show_grid, rng)
    }
}

impl<R> GameOfLife<R> {
    pub fn pattern_name(&self) -> &'static str {
        PATTERNS[self.pattern_index].name
    }

    /// Sleep before the next tick: active cadence while running, idle otherwise.
    pub fn cadence(&self, config: &Config) -> Duration {
        match self.mode {
            Mode::Running => config.frame_delay,
            Mode::Start | Mode::Paused => config.idle_frame_delay,
        }
    }
}

impl<R: Rng> GameOfLife<R> {
    pub fn new(show_grid: bool, rng: R) -> Self {
        Self {
            grid: Grid::blank(),
            mode: Mode::Start,
            generation: 0,
            pattern_index: 0,
            show_grid,
            rng,
        }
    }

    /// Simulate-or-idle step of one loop iteration.
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Start => self.grid = Grid::blank(),
            Mode::Running => {
                if self.generation == 0 {
                    self.grid = patterns::apply_pattern(&PATTERNS[self.pattern_index], &mut self.rng);
                    tracing::info!(
                        pattern = self.pattern_name(),
                        live = self.grid.live_count(),
                        "seeded grid"
                    );
                } else {
                    self.grid = step(&self.grid);
                }
                self.generation += 1;
            }
            Mode::Paused => {}
        }
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::TogglePlay => {
                self.mode = match self.mode {
                    Mode::Start | Mode::Paused => Mode::Running,
                    Mode::Running => Mode::Paused,
                };
                tracing::debug!(mode = %self.mode, generation = self.generation, "toggled play");
            }
            Command::PreviousPattern if self.mode == Mode::Start => {
                self.pattern_index = patterns::previous_index(self.pattern_index);
                tracing::debug!(pattern = self.pattern_name(), "selected pattern");
            }
            Command::NextPattern if self.mode == Mode::Start => {
                self.pattern_index = patterns::next_index(self.pattern_index);
                tracing::debug!(pattern = self.pattern_name(), "selected pattern");
            }
            Command::PreviousPattern | Command::NextPattern => {}
            Command::ToggleGrid => {
                self.show_grid = !self.show_grid;
                tracing::debug!(show_grid = self.show_grid, "toggled grid overlay");
            }
            Command::Reset => {
                self.mode = Mode::Start;
                self.generation = 0;
                self.pattern_index = 0;
                self.grid = Grid::blank();
                tracing::debug!("reset to start");
            }
            Command::Resize => return Flow::Redraw,
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameOfLife {
        GameOfLife::new(true, StdRng::seed_from_u64(3))
    }

    fn select(game: &mut GameOfLife, name: &str) {
        while game.pattern_name() != name {
            game.handle(Command::NextPattern);
        }
    }

    #[test]
    fn starts_idle_on_first_pattern() {
        let game = game();
        assert_eq!(game.mode, Mode::Start);
        assert_eq!(game.generation, 0);
        assert_eq!(game.pattern_name(), "Random");
        assert_eq!(game.grid.live_count(), 0);
    }

    #[test]
    fn start_ticks_keep_the_board_empty() {
        let mut game = game();
        for _ in 0..3 {
            game.tick();
        }
        assert_eq!(game.generation, 0);
        assert_eq!(game.grid.live_count(), 0);
    }

    #[test]
    fn first_running_tick_seeds_then_steps() {
        let mut game = game();
        select(&mut game, "Blinker");
        assert_eq!(game.handle(Command::TogglePlay), Flow::Continue);
        assert_eq!(game.mode, Mode::Running);
        assert_eq!(game.generation, 0);

        game.tick();
        assert_eq!(game.generation, 1);
        assert_eq!(game.grid.live_cells(), vec![(10, 20), (10, 21), (10, 22)]);

        game.tick();
        assert_eq!(game.generation, 2);
        assert_eq!(game.grid.live_cells(), vec![(9, 21), (10, 21), (11, 21)]);
    }

    #[test]
    fn pause_freezes_grid_and_generation() {
        let mut game = game();
        select(&mut game, "Glider");
        game.handle(Command::TogglePlay);
        game.tick();
        game.tick();

        game.handle(Command::TogglePlay);
        assert_eq!(game.mode, Mode::Paused);
        let frozen = game.grid.clone();
        for _ in 0..5 {
            game.tick();
        }
        assert_eq!(game.grid, frozen);
        assert_eq!(game.generation, 2);

        game.handle(Command::TogglePlay);
        assert_eq!(game.mode, Mode::Running);
        game.tick();
        assert_eq!(game.generation, 3);
    }

    #[test]
    fn reset_returns_to_start_from_any_mode() {
        for toggles in 0..3 {
            let mut game = game();
            game.handle(Command::NextPattern);
            for _ in 0..toggles {
                game.handle(Command::TogglePlay);
                game.tick();
            }
            game.handle(Command::Reset);
            assert_eq!(game.mode, Mode::Start);
            assert_eq!(game.generation, 0);
            assert_eq!(game.pattern_index, 0);
            assert_eq!(game.grid.live_count(), 0);
        }
    }

    #[test]
    fn pattern_cycling_wraps_both_ways() {
        let mut game = game();
        game.handle(Command::PreviousPattern);
        assert_eq!(game.pattern_index, PATTERNS.len() - 1);
        game.handle(Command::NextPattern);
        assert_eq!(game.pattern_index, 0);
    }

    #[test]
    fn pattern_is_locked_outside_start() {
        let mut game = game();
        game.handle(Command::NextPattern);
        game.handle(Command::TogglePlay);
        game.handle(Command::NextPattern);
        game.handle(Command::PreviousPattern);
        assert_eq!(game.pattern_index, 1);

        game.handle(Command::TogglePlay);
        assert_eq!(game.mode, Mode::Paused);
        game.handle(Command::PreviousPattern);
        assert_eq!(game.pattern_index, 1);
    }

    #[test]
    fn grid_toggle_works_in_every_mode() {
        let mut game = game();
        game.handle(Command::ToggleGrid);
        assert!(!game.show_grid);
        game.handle(Command::TogglePlay);
        game.handle(Command::ToggleGrid);
        assert!(game.show_grid);
        assert_eq!(game.mode, Mode::Running);
    }

    #[test]
    fn resize_and_quit_are_left_to_the_loop() {
        let mut game = game();
        assert_eq!(game.handle(Command::Resize), Flow::Redraw);
        assert_eq!(game.handle(Command::Quit), Flow::Quit);
        assert_eq!(game.mode, Mode::Start);
    }

    #[test]
    fn cadence_depends_on_mode() {
        let config = Config::default();
        let mut game = game();
        assert_eq!(game.cadence(&config), config.idle_frame_delay);
        game.handle(Command::TogglePlay);
        assert_eq!(game.cadence(&config), config.frame_delay);
        game.handle(Command::TogglePlay);
        assert_eq!(game.cadence(&config), config.idle_frame_delay);
        assert!(config.frame_delay < config.idle_frame_delay);
    }
}
