use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file expected next to the executable
pub const CONFIG_FILE_NAME: &str = "config.yml";
/// Append-only log file written next to the executable
pub const LOG_FILE_NAME: &str = "log.txt";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gotify: GotifyConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GotifyConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub server_url: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Top-level media category folders whose direct children are shared,
    /// not release-specific (e.g. "Movies", "Series")
    #[serde(default)]
    pub root_folders: Vec<String>,
    /// Extensions counted as video containers during cleanup
    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root_folders: Vec::new(),
            video_extensions: default_video_extensions(),
        }
    }
}

fn default_video_extensions() -> Vec<String> {
    vec!["mkv".to_string()]
}

impl Config {
    /// Load the configuration from a YAML file.
    ///
    /// A missing or malformed file is an error; the hook never runs with
    /// partial defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Directory the running executable lives in. The config and log files
    /// sit next to the binary, wherever Radarr/Sonarr invokes it from.
    pub fn exe_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe().context("Could not determine executable path")?;
        let dir = exe
            .parent()
            .context("Executable path has no parent directory")?;

        Ok(dir.to_path_buf())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::exe_dir()?.join(CONFIG_FILE_NAME))
    }
}
