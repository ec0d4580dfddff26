/// Persisted user settings: interface language and last used directory
use crate::error::ConfigError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = ".rvmat_creator";
pub const CONFIG_FILE_NAME: &str = "app_config.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Next language in [`Language::ALL`], wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub language: Language,

    #[serde(default, alias = "last_directory")]
    pub last_directory: String,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `~/.rvmat_creator/app_config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDir)
}

/// Settings bound to a file; every setter writes through
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: AppConfig,
}

impl ConfigStore {
    pub fn open_default() -> Result<Self, ConfigError> {
        Self::open(default_config_path()?)
    }

    /// Load settings from `path`, creating the file with defaults when absent.
    /// A corrupt file is reported and replaced by defaults in memory only.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ConfigError> {
        let path = path.into();

        if !path.exists() {
            let store = Self {
                path,
                config: AppConfig::default(),
            };
            store.save()?;
            info!("created config file at {}", store.path.display());
            return Ok(store);
        }

        let config = match fs::read_to_string(&path)
            .map_err(ConfigError::from)
            .and_then(|content| AppConfig::from_json(&content))
        {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring config at {}: {err}", path.display());
                AppConfig::default()
            }
        };

        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn last_directory(&self) -> &str {
        &self.config.last_directory
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, self.config.to_json()?)?;
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), ConfigError> {
        self.config.language = language;
        self.save()
    }

    pub fn set_last_directory<S: Into<String>>(&mut self, directory: S) -> Result<(), ConfigError> {
        self.config.last_directory = directory.into();
        self.save()
    }
}
