//! Trace output.
//!
//! The alternate screen owns stdout and stderr, so traces only go to a file,
//! and only when one was configured.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Installs a file subscriber filtered by `RUST_LOG` (default `info`).
/// Without a path nothing is installed and every event is dropped.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a second init in the same process keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_is_a_no_op() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let missing = Path::new("/nonexistent-dir/conway/trace.log");
        assert!(init(Some(missing)).is_err());
    }
}
