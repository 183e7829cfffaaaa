//! Optional RON configuration for the artgrid binary.
//!
//! The file is looked up at the path given as the first argument, or
//! `./artgrid.ron`. A missing file means defaults; every field may be omitted.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use artgrid_engine::{page_url, FetchSettings, DEFAULT_BASE_URL, DEFAULT_ROWS_PER_PAGE};
use log::LevelFilter;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "./artgrid.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub api_base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
    pub page_limit: Option<u32>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: fetch.connect_timeout.as_millis() as u64,
            request_timeout_ms: fetch.request_timeout.as_millis() as u64,
            max_bytes: fetch.max_bytes,
            page_limit: None,
            log_file: PathBuf::from("./artgrid.log"),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = match fs::read_to_string(path) {
            Ok(text) => Self::from_ron(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(err.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(err) = page_url(&self.api_base_url, 1, self.page_limit) {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: err.message,
            });
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.page_limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "page_limit",
                reason: "must be greater than zero when set".to_string(),
            });
        }
        if artgrid_logging::parse_level(&self.log_level).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "log_level",
                reason: format!("unknown level {:?}", self.log_level),
            });
        }
        Ok(())
    }

    pub fn log_level(&self) -> LevelFilter {
        artgrid_logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_bytes,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            page_limit: self.page_limit,
        }
    }
}

pub fn config_path_from_args() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
