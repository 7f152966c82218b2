use std::fs;
use std::path::Path;

use arrsweep::core::cleaner::ReleaseCleaner;
use arrsweep::core::config::GeneralConfig;
use arrsweep::core::event::{Arr, MediaEvent};
use tempfile::TempDir;

fn cleaner() -> ReleaseCleaner {
    ReleaseCleaner::new(&GeneralConfig::default())
}

fn release_event(folder: &Path, file_name: &str) -> MediaEvent {
    let source_path = folder.join(file_name).to_string_lossy().into_owned();
    let source_folder = folder.to_string_lossy().into_owned();

    let mut event = MediaEvent::new(Arr::Radarr, "Download".to_string(), source_path, source_folder);
    event.file_name = file_name.to_string();
    event.in_folder = true;
    event
}

fn shared_event(root: &Path, file_name: &str) -> MediaEvent {
    let mut event = release_event(root, file_name);
    event.in_folder = false;
    event
}

fn touch(path: &Path) {
    fs::write(path, b"x").unwrap();
}

#[test]
fn test_shared_root_file_is_deleted_alone() {
    let dir = TempDir::new().unwrap();
    let movies = dir.path().join("Movies");
    fs::create_dir(&movies).unwrap();
    touch(&movies.join("Butchers.Crossing.2023.mkv"));
    touch(&movies.join("Other.Movie.2024.mkv"));

    let event = shared_event(&movies, "Butchers.Crossing.2023.mkv");
    let stats = cleaner().sweep(&event).unwrap();

    assert!(!movies.join("Butchers.Crossing.2023.mkv").exists());
    assert!(movies.join("Other.Movie.2024.mkv").exists());
    assert!(movies.exists());
    assert_eq!(stats.deleted_files, 1);
}

#[test]
fn test_shared_root_entry_may_be_a_directory() {
    let dir = TempDir::new().unwrap();
    let movies = dir.path().join("Movies");
    let stray = movies.join("Stray.Folder");
    fs::create_dir_all(&stray).unwrap();
    touch(&stray.join("leftover.nfo"));

    let event = shared_event(&movies, "Stray.Folder");
    let stats = cleaner().sweep(&event).unwrap();

    assert!(!stray.exists());
    assert!(movies.exists());
    assert_eq!(stats.deleted_dirs, 1);
}

#[test]
fn test_release_folder_with_extra_video_keeps_it() {
    let dir = TempDir::new().unwrap();
    let release = dir.path().join("Butchers.Crossing.2023");
    fs::create_dir(&release).unwrap();
    touch(&release.join("Butchers.Crossing.2023.mkv"));
    touch(&release.join("poster.jpg"));
    touch(&release.join("sample.mkv"));

    let event = release_event(&release, "Butchers.Crossing.2023.mkv");
    let stats = cleaner().sweep(&event).unwrap();

    // Non-video pruned, reported file deleted, the other video kept
    assert!(!release.join("poster.jpg").exists());
    assert!(!release.join("Butchers.Crossing.2023.mkv").exists());
    assert!(release.join("sample.mkv").exists());
    assert!(release.exists());
    assert_eq!(stats.scanned, 3);
    assert_eq!(stats.video_files, 2);
    assert_eq!(stats.deleted_files, 2);
}

#[test]
fn test_release_folder_with_single_video_is_removed_entirely() {
    let dir = TempDir::new().unwrap();
    let release = dir.path().join("Butchers.Crossing.2023");
    fs::create_dir(&release).unwrap();
    touch(&release.join("Butchers.Crossing.2023.mkv"));
    touch(&release.join("poster.jpg"));

    let event = release_event(&release, "Butchers.Crossing.2023.mkv");
    let stats = cleaner().sweep(&event).unwrap();

    assert!(!release.exists());
    assert_eq!(stats.video_files, 1);
    assert_eq!(stats.deleted_files, 1);
    assert_eq!(stats.deleted_dirs, 1);
}

#[test]
fn test_empty_subdirectory_is_pruned_nonempty_is_kept() {
    let dir = TempDir::new().unwrap();
    let release = dir.path().join("Show.S01E01");
    fs::create_dir(&release).unwrap();
    touch(&release.join("Show.S01E01.mkv"));
    touch(&release.join("extra.mkv"));
    fs::create_dir(release.join("Sample")).unwrap();
    let subs = release.join("Subs");
    fs::create_dir(&subs).unwrap();
    touch(&subs.join("english.srt"));

    let event = release_event(&release, "Show.S01E01.mkv");
    let stats = cleaner().sweep(&event).unwrap();

    assert!(!release.join("Sample").exists());
    assert!(subs.exists());
    assert_eq!(stats.deleted_dirs, 1);
    assert_eq!(stats.failed, 1);
}

#[test]
fn test_unreadable_release_folder_aborts_the_sweep() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("never-created");

    let event = release_event(&missing, "ghost.mkv");
    let result = cleaner().sweep(&event);

    assert!(result.is_err());
}

#[test]
fn test_dry_run_deletes_nothing() {
    let dir = TempDir::new().unwrap();
    let release = dir.path().join("Butchers.Crossing.2023");
    fs::create_dir(&release).unwrap();
    touch(&release.join("Butchers.Crossing.2023.mkv"));
    touch(&release.join("poster.jpg"));

    let event = release_event(&release, "Butchers.Crossing.2023.mkv");
    let stats = cleaner().dry_run(true).sweep(&event).unwrap();

    assert!(release.join("Butchers.Crossing.2023.mkv").exists());
    assert!(release.join("poster.jpg").exists());
    assert_eq!(stats.deleted_files, 1);
    assert_eq!(stats.deleted_dirs, 1);
}

#[test]
fn test_configured_extensions_protect_more_containers() {
    let dir = TempDir::new().unwrap();
    let release = dir.path().join("Mixed.Release");
    fs::create_dir(&release).unwrap();
    touch(&release.join("movie.mkv"));
    touch(&release.join("bonus.mp4"));
    touch(&release.join("notes.txt"));

    let general = GeneralConfig {
        root_folders: Vec::new(),
        video_extensions: vec!["mkv".to_string(), "mp4".to_string()],
    };
    let event = release_event(&release, "movie.mkv");
    let stats = ReleaseCleaner::new(&general).sweep(&event).unwrap();

    // Two videos seen, so only the reported file goes; the mp4 survives
    assert!(release.join("bonus.mp4").exists());
    assert!(!release.join("notes.txt").exists());
    assert!(!release.join("movie.mkv").exists());
    assert_eq!(stats.video_files, 2);
}
