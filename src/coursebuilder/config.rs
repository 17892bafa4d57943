use crate::error::{CourseError, Result};
use crate::store::DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for a course, stored in .coursebuilder/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseConfig {
    /// Key the item collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Where downloads are written when no destination is given
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            download_dir: None,
        }
    }
}

impl CourseConfig {
    pub const KEYS: &'static [&'static str] = &["storage-key", "download-dir"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CourseError::Io)?;
        let config: CourseConfig =
            serde_json::from_str(&content).map_err(CourseError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CourseError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CourseError::Serialization)?;
        fs::write(config_path, content).map_err(CourseError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "download-dir" => Some(
                self.download_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
                if !valid {
                    return Err(format!(
                        "Invalid storage key '{}': use letters, digits, '-' or '_'",
                        value
                    ));
                }
                self.storage_key = value.to_string();
                Ok(())
            }
            "download-dir" => {
                self.download_dir = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
