use crate::core::store::LogStore;
use crate::errors::{AppError, AppResult};
use crate::models::{FieldSpec, Preset, Schema};
use crate::storage::{Backend, JsonFile, MemoryBackend};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: String,
    pub storage: StorageKind,
    pub bind: String,
    pub log_level: String,
    pub fields: Vec<FieldSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_default().to_string_lossy().to_string(),
            storage: StorageKind::File,
            bind: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            fields: Preset::Timesheet.fields(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the default path of the JSON data file
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("timelogs.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Write this configuration to the standard config file.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Relative data file names live inside the config directory.
    pub fn resolve_data_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn schema(&self) -> AppResult<Schema> {
        Schema::new(self.fields.clone())
    }

    pub fn backend(&self) -> Box<dyn Backend> {
        match self.storage {
            StorageKind::File => Box::new(JsonFile::new(self.data_path())),
            StorageKind::Memory => Box::new(MemoryBackend::new()),
        }
    }

    /// Open the store described by this configuration.
    pub fn open_store(&self) -> AppResult<LogStore> {
        LogStore::open(self.schema()?, self.backend())
    }

    /// Initialize configuration and data files.
    ///
    /// Returns the configuration that was (or, in test mode, would have been)
    /// written.
    pub fn init_all(custom_data: Option<String>, preset: Preset, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = match custom_data {
            Some(name) => Self::resolve_data_path(&name),
            None => Self::data_file_default(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            fields: preset.fields(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
        }

        if !data_path.exists() {
            if let Some(parent) = data_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&data_path, "[]")?;
        }

        Ok(config)
    }
}
