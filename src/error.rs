//! Error types for the terminal front end.
//!
//! The simulation itself cannot fail; only talking to the terminal can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// stdout is not attached to an interactive terminal.
    #[error("Terminal not available")]
    TerminalNotAvailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LifeError = io_err.into();
        assert!(matches!(err, LifeError::Io(_)));
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn terminal_not_available_message() {
        assert_eq!(LifeError::TerminalNotAvailable.to_string(), "Terminal not available");
    }
}
