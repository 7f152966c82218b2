//! Import event extracted from the calling application's environment
//!
//! Radarr and Sonarr pass everything about a finished import through
//! environment variables. This module is the adapter at that boundary: it
//! reads the variables once and hands the rest of the program a plain record.

use std::env;
use std::fmt;

use crate::error::{Result, SweepError};

/// Event type both applications send when probing hook connectivity
pub const EVENT_TEST: &str = "Test";

/// Which application triggered the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arr {
    Radarr,
    Sonarr,
}

impl fmt::Display for Arr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arr::Radarr => write!(f, "Radarr"),
            Arr::Sonarr => write!(f, "Sonarr"),
        }
    }
}

/// One import event, populated from the environment and refined by the
/// classifier
#[derive(Debug, Clone)]
pub struct MediaEvent {
    pub event_type: String,
    pub source_path: String,
    pub source_folder: String,
    /// Last segment of `source_path`, set by the classifier
    pub file_name: String,
    /// True when the file sits in its own release folder rather than
    /// directly in a configured root folder, set by the classifier
    pub in_folder: bool,
    pub arr: Arr,
}

impl MediaEvent {
    pub fn new<S: Into<String>>(arr: Arr, event_type: S, source_path: S, source_folder: S) -> Self {
        Self {
            event_type: event_type.into(),
            source_path: source_path.into(),
            source_folder: source_folder.into(),
            file_name: String::new(),
            in_folder: false,
            arr,
        }
    }

    /// True when the calling application is testing the hook rather than
    /// reporting a real import
    pub fn is_connection_test() -> bool {
        env_var("radarr_eventtype") == EVENT_TEST || env_var("sonarr_eventtype") == EVENT_TEST
    }

    /// Build the event record from the calling application's variables.
    ///
    /// Radarr takes precedence when both event-type variables are set.
    pub fn from_env() -> Result<Self> {
        let radarr_event = env_var("radarr_eventtype");
        let sonarr_event = env_var("sonarr_eventtype");

        let event = if !radarr_event.is_empty() {
            MediaEvent::new(
                Arr::Radarr,
                radarr_event,
                env_var("radarr_moviefile_sourcepath"),
                env_var("radarr_moviefile_sourcefolder"),
            )
        } else if !sonarr_event.is_empty() {
            // Sonarr invocations carry the source folder in the radarr_ variable
            MediaEvent::new(
                Arr::Sonarr,
                sonarr_event,
                env_var("sonarr_episodefile_sourcepath"),
                env_var("radarr_moviefile_sourcefolder"),
            )
        } else {
            return Err(SweepError::event(
                "neither radarr_eventtype nor sonarr_eventtype is set",
            ));
        };

        log::info!("The source path is: {}", event.source_path);
        log::info!("The source folder is: {}", event.source_folder);

        Ok(event)
    }
}

fn env_var(name: &str) -> String {
    env::var(name).unwrap_or_default()
}
