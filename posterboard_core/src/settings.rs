use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::QUIZ_URL;

pub const APP_NAME: &str = "posterboard";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// User preferences, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play sound cues
    pub sound: bool,
    /// Directory holding `images/...`
    pub assets_dir: PathBuf,
    /// Write logs here; no logging when unset
    pub log_file: Option<PathBuf>,
    /// Target frames per second
    pub fps: u16,
    /// Address opened by the "Quiz Online" tile
    pub quiz_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            assets_dir: PathBuf::from("assets"),
            log_file: None,
            fps: 30,
            quiz_url: QUIZ_URL.to_string(),
        }
    }
}

impl Settings {
    /// `$CONFIG_DIR/posterboard/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` (or the default location); a missing file means defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn frame_interval(&self) -> Duration {
        let fps = self.fps.clamp(1, 120) as u64;
        Duration::from_millis(1000 / fps)
    }
}
