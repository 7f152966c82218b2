// arrsweep Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, SweepError};

// Module declarations
pub mod core;

// Re-export commonly used types
pub use core::config::Config;
pub use core::event::{Arr, MediaEvent};

use std::fs::OpenOptions;
use std::path::Path;

// Initialize logging
//
// The hook runs in the background with no terminal attached, so records are
// appended to the log file next to the executable.
pub fn init_logging(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
