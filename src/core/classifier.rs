//! Folder classification for import events
//!
//! Decides whether an imported file sits directly in one of the configured
//! root folders or inside its own release folder. The cleanup policy branches
//! entirely on this flag.

use std::path::Path;

use crate::core::event::MediaEvent;

impl MediaEvent {
    /// Classify the source path against the configured root folders.
    ///
    /// The last path segment is the file name; the second-to-last segment is
    /// the candidate release-folder name. A candidate that is NOT in
    /// `root_folders` marks a release-specific folder (`in_folder = true`).
    /// The lookup is an exact string match, same casing as configured.
    pub fn classify(&mut self, root_folders: &[String]) {
        let path = Path::new(&self.source_path);

        self.file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let last_folder = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::info!("Found last folder to be: {}", last_folder);

        self.in_folder = !root_folders.iter().any(|f| *f == last_folder);

        if self.in_folder {
            log::info!("{} is in a release folder", self.file_name);
        } else {
            log::info!("{} is directly in a root folder", self.file_name);
        }
    }
}
