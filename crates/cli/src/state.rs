use std::time::Duration;
use std::{fs, path::PathBuf};

use direct_links::{ApiVersion, ConfigError, ResolverConfig};
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "lucid-links";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port of the filespace daemon's local API
    #[serde(default = "default_port")]
    pub port: u16,
    /// Where the filespace is mounted locally
    #[serde(default = "default_mount_point")]
    pub mount_point: String,
    /// API dialect to speak, 2 or 3
    #[serde(default = "default_api_version")]
    pub api_version: u8,
    /// Filespace name, needed for v2 links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filespace: Option<String>,
    /// Maximum concurrent requests to the daemon
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: f64,
    /// Per-request timeout, unset means no limit beyond the HTTP client's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<f64>,
}

fn default_port() -> u16 {
    8280
}

fn default_mount_point() -> String {
    "/Volumes/filespace".to_string()
}

fn default_api_version() -> u8 {
    u8::from(ApiVersion::default())
}

fn default_max_workers() -> usize {
    direct_links::config::DEFAULT_MAX_CONCURRENT_REQUESTS
}

fn default_retry_attempts() -> u32 {
    direct_links::config::DEFAULT_RETRY_ATTEMPTS
}

fn default_retry_delay_secs() -> f64 {
    direct_links::config::DEFAULT_RETRY_DELAY.as_secs_f64()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            mount_point: default_mount_point(),
            api_version: default_api_version(),
            filespace: None,
            max_workers: default_max_workers(),
            retry_attempts: default_retry_attempts(),
            retry_delay_secs: default_retry_delay_secs(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Build the resolver settings described by this file
    pub fn resolver_config(&self) -> Result<ResolverConfig, StateError> {
        let version = ApiVersion::try_from(self.api_version)?;
        let retry_delay = seconds("retry_delay_secs", self.retry_delay_secs)?;

        let mut config = ResolverConfig::new(self.port, self.mount_point.clone())
            .with_version(version)
            .with_max_concurrent_requests(self.max_workers)
            .with_retry_attempts(self.retry_attempts)
            .with_retry_delay(retry_delay);
        if let Some(filespace) = &self.filespace {
            config = config.with_filespace(filespace.clone());
        }
        if let Some(timeout) = self.request_timeout_secs {
            config = config.with_request_timeout(seconds("request_timeout_secs", timeout)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn seconds(field: &'static str, value: f64) -> Result<Duration, StateError> {
    Duration::try_from_secs_f64(value).map_err(|_| StateError::InvalidDuration(field, value))
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the config directory (~/.lucid-links)
    pub config_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the config directory path (custom or default ~/.lucid-links)
    pub fn config_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new config directory
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let config_dir = Self::config_dir(custom_path)?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        let config = config.unwrap_or_default();
        // reject configs the resolver would refuse before writing them out
        config.resolver_config()?;

        fs::create_dir_all(&config_dir)?;
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            config_dir,
            config_path,
            config,
        })
    }

    /// Load existing state from the config directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let config_dir = Self::config_dir(custom_path)?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            config_dir,
            config_path,
            config,
        })
    }

    /// Load existing state, or defaults if `init` was never run
    pub fn load_or_default(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        match Self::load(custom_path.clone()) {
            Err(StateError::NotInitialized) => {
                let config_dir = Self::config_dir(custom_path)?;
                tracing::debug!(dir = %config_dir.display(), "no config file, using defaults");
                Ok(Self {
                    config_path: config_dir.join(CONFIG_FILE_NAME),
                    config_dir,
                    config: AppConfig::default(),
                })
            }
            other => other,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("config not initialized. Run 'lucid-links init' first")]
    NotInitialized,

    #[error("config already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("invalid duration for {0}: {1}")]
    InvalidDuration(&'static str, f64),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
