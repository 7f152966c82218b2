use anyhow::Result;
use clap::{Arg, Command};
use colored::*;
use std::path::PathBuf;

use arrsweep::core::config::{Config, LOG_FILE_NAME};
use arrsweep::core::gotify;
use arrsweep::core::ReleaseCleaner;
use arrsweep::init_logging;
use arrsweep::MediaEvent;

fn main() -> Result<()> {
    let matches = Command::new("arrsweep")
        .about("Post-import cleanup hook for Radarr and Sonarr")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the config file (defaults to config.yml next to the executable)"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Log what would be deleted without actually deleting")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("version") {
        println!("arrsweep version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Radarr/Sonarr probe the hook with a Test event before saving it
    if MediaEvent::is_connection_test() {
        println!("Radarr/Sonarr is testing the script and it works");
        return Ok(());
    }

    let config_path = match matches.get_one::<String>("config") {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    init_logging(&Config::exe_dir()?.join(LOG_FILE_NAME))?;

    let dry_run = matches.get_flag("dry-run");
    if dry_run {
        println!("{}", "DRY RUN MODE - No files will be deleted".yellow().bold());
    }

    let mut event = match MediaEvent::from_env() {
        Ok(event) => event,
        Err(e) => {
            log::error!("{}", e);
            return Err(e.into());
        }
    };

    event.classify(&config.general.root_folders);

    let cleaner = ReleaseCleaner::new(&config.general).dry_run(dry_run);
    let stats = match cleaner.sweep(&event) {
        Ok(stats) => stats,
        Err(e) => {
            // Listing failures abort the sweep; the notification is skipped
            log::error!("{}", e);
            return Ok(());
        }
    };

    if dry_run {
        println!(
            "{} {}",
            "Would delete:".white(),
            format!(
                "{} file(s), {} folder(s)",
                stats.deleted_files, stats.deleted_dirs
            )
            .yellow()
            .bold()
        );
        return Ok(());
    }

    if stats.failed > 0 {
        log::warn!("{} entr(ies) could not be deleted", stats.failed);
    }

    gotify::notify_deletion(&config.gotify, &event);

    Ok(())
}
