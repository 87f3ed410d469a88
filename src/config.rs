//! Runtime settings.
//!
//! There are no command line flags. Everything has a default and a few
//! values can be overridden from the environment:
//!
//! - `CONWAY_FRAME_MS`: delay between generations while running (default 100)
//! - `CONWAY_IDLE_MS`: delay between frames in Start and Paused (default 200)
//! - `CONWAY_SEED`: fixed seed for the Random pattern
//! - `CONWAY_LOG`: file to write trace output to

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_FRAME_MS: u64 = 100;
pub const DEFAULT_IDLE_FRAME_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub frame_delay: Duration,
    pub idle_frame_delay: Duration,
    pub show_grid: bool,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    /// Settings that were present but could not be parsed.
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(DEFAULT_FRAME_MS),
            idle_frame_delay: Duration::from_millis(DEFAULT_IDLE_FRAME_MS),
            show_grid: true,
            seed: None,
            log_file: None,
            rejected: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable values keep
    /// the default and are listed in `rejected`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = config.parse_var::<u64>(&lookup, "CONWAY_FRAME_MS") {
            config.frame_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = config.parse_var::<u64>(&lookup, "CONWAY_IDLE_MS") {
            config.idle_frame_delay = Duration::from_millis(ms);
        }
        config.seed = config.parse_var(&lookup, "CONWAY_SEED");
        config.log_file = lookup("CONWAY_LOG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        config.normalized()
    }

    /// Idle cadence is never faster than the active one.
    pub fn normalized(mut self) -> Self {
        if self.idle_frame_delay < self.frame_delay {
            self.idle_frame_delay = self.frame_delay;
        }
        self
    }

    fn parse_var<T: FromStr>(&mut self, lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
        let raw = lookup(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.rejected.push(format!("{key}={raw}"));
                None
            }
        }
    }
}
