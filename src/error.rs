use std::io;
use thiserror::Error;

/// Custom error type for the arrsweep hook
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Event error: {0}")]
    Event(String),
}

/// Result type alias for the arrsweep hook
pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    /// Create an event error
    pub fn event<S: Into<String>>(msg: S) -> Self {
        SweepError::Event(msg.into())
    }
}
