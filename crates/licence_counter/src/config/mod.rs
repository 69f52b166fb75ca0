use std::fs;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde::Deserialize;

use crate::errors::{LicenceCounterError, LicenceCounterResult};

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Direct TCP SMB port
pub const DEFAULT_SMB_PORT: u16 = 445;

fn default_port() -> u16 {
    DEFAULT_SMB_PORT
}

fn default_title() -> String {
    "Simple Licence Counter v0.2A".to_string()
}

fn default_actual_label() -> String {
    "Свободные ключи".to_string()
}

fn default_activated_label() -> String {
    "Активированные".to_string()
}

fn default_refresh_label() -> String {
    "Обновить".to_string()
}

/// Application configuration loaded from JSON
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct Config {
    path: PathConfig,
    extensions: ExtensionsConfig,
    file_server: FileServerConfig,
    #[serde(default)]
    window: WindowConfig,
}

/// Directories on the share that hold the key files
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct PathConfig {
    actual_keys: String,
    activated_keys: String,
}

/// Filename suffixes identifying key files in each directory
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ExtensionsConfig {
    actual: String,
    activated: String,
}

/// SMB server address and credentials
#[derive(Clone, Deserialize, Getters)]
pub struct FileServerConfig {
    ip_address: String,
    /// Share name
    target_dir: String,
    username: String,
    password: String,
    client_machine_name: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default)]
    workgroup: String,
}

// Keeps the password out of logs.
impl std::fmt::Debug for FileServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileServerConfig")
            .field("ip_address", &self.ip_address)
            .field("target_dir", &self.target_dir)
            .field("username", &self.username)
            .field("password", &"***")
            .field("client_machine_name", &self.client_machine_name)
            .field("port", &self.port)
            .field("workgroup", &self.workgroup)
            .finish()
    }
}

/// Window captions
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_actual_label")]
    actual_label: String,
    #[serde(default = "default_activated_label")]
    activated_label: String,
    #[serde(default = "default_refresh_label")]
    refresh_label: String,
    #[serde(default)]
    footer: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            actual_label: default_actual_label(),
            activated_label: default_activated_label(),
            refresh_label: default_refresh_label(),
            footer: String::new(),
        }
    }
}

impl Config {
    /// Read and parse a configuration file
    ///
    /// # Errors
    /// * [`LicenceCounterError::ConfigRead`] - the file is missing or unreadable
    /// * [`LicenceCounterError::ConfigParse`] - the JSON is malformed or a required key is absent
    pub fn load(path: &Path) -> LicenceCounterResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| LicenceCounterError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| LicenceCounterError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Reject settings that would make every refresh meaningless
    pub fn validate(&self) -> LicenceCounterResult<()> {
        let server = [
            ("file_server.ip_address", &self.file_server.ip_address),
            ("file_server.target_dir", &self.file_server.target_dir),
        ];
        // Extensions are literal suffixes, so whitespace is a legitimate value
        let extensions = [
            ("extensions.actual", &self.extensions.actual),
            ("extensions.activated", &self.extensions.activated),
        ];

        let empty = server
            .iter()
            .find(|(_, value)| value.trim().is_empty())
            .or_else(|| extensions.iter().find(|(_, value)| value.is_empty()));
        if let Some((name, _)) = empty {
            return Err(LicenceCounterError::ValidationError {
                message: format!("{} must not be empty", name),
            });
        }

        if self.file_server.port == 0 {
            return Err(LicenceCounterError::ValidationError {
                message: "file_server.port must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Re-reads the configuration file on demand, keeping the last good copy
#[derive(Debug, Clone)]
pub struct ConfigReloader {
    path: PathBuf,
    current: Config,
}

impl ConfigReloader {
    pub fn new(path: PathBuf, initial: Config) -> Self {
        Self {
            path,
            current: initial,
        }
    }

    /// Load the file again and return the configuration to use
    ///
    /// A file that no longer loads or validates is logged and ignored.
    pub fn reload(&mut self) -> &Config {
        let loaded = Self::load_valid(&self.path);
        match loaded {
            Ok(config) => self.current = config,
            Err(e) => tracing::warn!("Keeping previous configuration: {}", e),
        }
        &self.current
    }

    fn load_valid(path: &Path) -> LicenceCounterResult<Config> {
        let config = Config::load(path)?;
        config.validate()?;
        Ok(config)
    }
}
