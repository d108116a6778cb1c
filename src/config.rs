//! Configuration management for the application.
//!
//! Settings are layered from built-in defaults, an optional file in the
//! platform config directory, and an optional `mealpicker.toml` in the
//! working directory. Later sources override earlier ones.

use config::{Config, ConfigError, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backing file of the food list
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Seconds before the editor's "saved" message disappears
    #[serde(default = "default_status_clear_secs")]
    pub status_clear_secs: u64,

    /// Where log lines are written
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Minimum log level (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            status_clear_secs: default_status_clear_secs(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn status_clear_after(&self) -> Duration {
        Duration::from_secs(self.status_clear_secs)
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data.txt")
}

fn default_status_clear_secs() -> u64 {
    3
}

fn default_log_file() -> PathBuf {
    PathBuf::from("mealpicker.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load the configuration from the standard locations.
///
/// Sources, in order:
/// 1. Default values
/// 2. `config.toml` in the system config directory
/// 3. `mealpicker.toml` in the current directory
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let local = PathBuf::from("mealpicker.toml");
    load_config_from(get_system_config_path(), Some(local))
}

/// Load the configuration from explicit file locations. Missing files are skipped.
pub fn load_config_from(
    system_path: Option<PathBuf>,
    local_path: Option<PathBuf>,
) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    let mut builder = Config::builder()
        .set_default("data_file", defaults.data_file.to_string_lossy().into_owned())?
        .set_default("status_clear_secs", defaults.status_clear_secs)?
        .set_default("log_file", defaults.log_file.to_string_lossy().into_owned())?
        .set_default("log_level", defaults.log_level)?;

    for path in [system_path, local_path].into_iter().flatten() {
        builder = builder.add_source(File::from(path).required(false));
    }

    builder.build()?.try_deserialize()
}

/// Get the path to the system configuration file
fn get_system_config_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "mealpicker", "mealpicker")?;
    Some(proj_dirs.config_dir().join("config.toml"))
}
