//! Release folder cleanup for imported downloads
//!
//! This module deletes what the calling application left behind after an
//! import: auxiliary files inside a release folder, and the source file or
//! folder itself once nothing worth keeping remains.
//!
//! # Examples
//!
//! ```no_run
//! use arrsweep::core::cleaner::ReleaseCleaner;
//! use arrsweep::core::config::GeneralConfig;
//! use arrsweep::core::event::{Arr, MediaEvent};
//!
//! let mut event = MediaEvent::new(Arr::Radarr, "Download", "/mnt/Movies/a.mkv", "/mnt/Movies");
//! event.classify(&["Movies".to_string()]);
//!
//! let cleaner = ReleaseCleaner::new(&GeneralConfig::default());
//! let stats = cleaner.sweep(&event)?;
//! println!("Deleted {} files", stats.deleted_files);
//! # Ok::<(), arrsweep::SweepError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::core::config::GeneralConfig;
use crate::core::event::MediaEvent;
use crate::error::Result;

/// Cleanup executor for one import event
///
/// Supports a dry-run mode that logs and counts what would be deleted
/// without touching the filesystem.
pub struct ReleaseCleaner {
    video_extensions: Vec<String>,
    dry_run: bool,
}

/// Statistics from cleanup operations
#[derive(Debug, Default)]
pub struct CleanupStats {
    pub scanned: usize,
    pub video_files: usize,
    pub deleted_files: usize,
    pub deleted_dirs: usize,
    pub failed: usize,
}

impl ReleaseCleaner {
    pub fn new(general: &GeneralConfig) -> Self {
        Self {
            video_extensions: general.video_extensions.clone(),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the cleanup decided by the classifier.
    ///
    /// A release folder is pruned of non-video entries first; the folder
    /// itself is only removed when the reported file is the last video left
    /// in it. A file sitting directly in a root folder is deleted on its own.
    ///
    /// Failing to list the release folder aborts the sweep with an error;
    /// individual deletion failures are logged and counted instead.
    pub fn sweep(&self, event: &MediaEvent) -> Result<CleanupStats> {
        if event.in_folder {
            self.sweep_release_folder(event)
        } else {
            self.delete_shared_entry(event)
        }
    }

    fn sweep_release_folder(&self, event: &MediaEvent) -> Result<CleanupStats> {
        let mut stats = CleanupStats::default();
        let folder = Path::new(&event.source_folder);

        for entry in fs::read_dir(folder)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();

            stats.scanned += 1;
            log::info!("Found file: {}", name);

            if self.is_video(&name) {
                stats.video_files += 1;
                continue;
            }

            self.remove_entry(&entry, &mut stats);
        }

        if stats.video_files > 1 {
            log::info!(
                "Found {} video files in the folder, deleting only {}",
                stats.video_files,
                event.source_path
            );
            self.remove_file(Path::new(&event.source_path), &mut stats);
        } else {
            log::info!(
                "Found at most one video file in the folder, deleting the folder {}",
                event.source_folder
            );
            self.remove_dir_all(folder, &mut stats);
        }

        Ok(stats)
    }

    fn delete_shared_entry(&self, event: &MediaEvent) -> Result<CleanupStats> {
        let mut stats = CleanupStats::default();
        let path = Path::new(&event.source_path);

        log::info!("Deleting the file {}", event.source_path);

        if path.is_dir() {
            self.remove_dir_all(path, &mut stats);
        } else {
            self.remove_file(path, &mut stats);
        }

        Ok(stats)
    }

    fn is_video(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.video_extensions.iter().any(|v| v.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    /// Prune one non-video entry: files are removed directly, directories
    /// only when already empty.
    fn remove_entry(&self, entry: &fs::DirEntry, stats: &mut CleanupStats) {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if self.dry_run {
            log::info!("Would delete non-video entry: {}", path.display());
            if is_dir {
                stats.deleted_dirs += 1;
            } else {
                stats.deleted_files += 1;
            }
            return;
        }

        let result = if is_dir {
            fs::remove_dir(&path)
        } else {
            fs::remove_file(&path)
        };

        match result {
            Ok(()) => {
                log::info!("Deleting non-video entry: {}", path.display());
                if is_dir {
                    stats.deleted_dirs += 1;
                } else {
                    stats.deleted_files += 1;
                }
            }
            Err(e) => {
                log::warn!("Failed to delete {}: {}", path.display(), e);
                stats.failed += 1;
            }
        }
    }

    fn remove_file(&self, path: &Path, stats: &mut CleanupStats) {
        if self.dry_run {
            log::info!("Would delete file: {}", path.display());
            stats.deleted_files += 1;
            return;
        }

        match fs::remove_file(path) {
            Ok(()) => stats.deleted_files += 1,
            Err(e) => {
                log::warn!("Failed to delete {}: {}", path.display(), e);
                stats.failed += 1;
            }
        }
    }

    fn remove_dir_all(&self, path: &Path, stats: &mut CleanupStats) {
        if self.dry_run {
            log::info!("Would delete folder: {}", path.display());
            stats.deleted_dirs += 1;
            return;
        }

        match fs::remove_dir_all(path) {
            Ok(()) => stats.deleted_dirs += 1,
            Err(e) => {
                log::warn!("Failed to delete {}: {}", path.display(), e);
                stats.failed += 1;
            }
        }
    }
}
