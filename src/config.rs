use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::system::source::DEFAULT_PROC_ROOT;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub default_sort: String,
    /// Rows shown in the process table; 0 means no cap.
    pub max_rows: usize,
    pub proc_root: PathBuf,
    /// Gap between seeding the CPU baseline and sampling in `--once` mode.
    pub once_delay_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            default_sort: "none".to_string(),
            max_rows: 120,
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            once_delay_ms: 250,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub theme: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            theme: "dark".to_string(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("proctop").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "invalid config, using defaults"
                );
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}
