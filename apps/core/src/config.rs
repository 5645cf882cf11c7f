use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_DIR_NAME: &str = ".quickopen";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

const DEFAULT_MAX_RECENT: usize = 10;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Parse(error) => write!(f, "parse error: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Parse(value)
    }
}

/// Persistent user preferences, stored as YAML under the home directory.
/// Field names match the on-disk keys of existing config files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub default_manager: String,
    pub custom_managers: BTreeMap<String, String>,
    pub recent_paths: Vec<String>,
    pub max_recent: usize,
    pub file_type_apps: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_manager: String::new(),
            custom_managers: BTreeMap::new(),
            recent_paths: Vec::new(),
            max_recent: DEFAULT_MAX_RECENT,
            file_type_apps: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Reads the config file, treating a missing or empty file as defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(error) => return Err(ConfigError::Io(error)),
        };

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Writes the config as YAML, staging to a sibling temp file and renaming
    /// so a failed write never leaves a half-written config behind.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let staged = path.with_extension("yaml.tmp");
        fs::write(&staged, yaml)?;
        fs::rename(&staged, path)?;
        Ok(())
    }

    /// Moves `path` to the front of the recent list, removing any earlier
    /// occurrence and truncating to `max_recent`.
    pub fn push_recent(&mut self, path: &str) {
        self.recent_paths.retain(|existing| existing != path);
        self.recent_paths.insert(0, path.to_string());
        self.recent_paths.truncate(self.max_recent);
    }

    /// Drops recent entries rejected by `keep`, returning how many were
    /// removed.
    pub fn prune_recent<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.recent_paths.len();
        self.recent_paths.retain(|path| keep(path));
        before - self.recent_paths.len()
    }

    pub fn custom_manager(&self, name: &str) -> Option<&str> {
        self.custom_managers.get(name).map(String::as_str)
    }
}

pub fn validate(config: &Config) -> Result<(), String> {
    if config.max_recent == 0 {
        return Err("max_recent must be at least 1".into());
    }

    Ok(())
}

pub fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}
