use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shortener_engine::{
    FailureKind, ReqwestShortener, ShortenError, ShortenSettings, DEFAULT_ENDPOINT,
};
use shortener_logging::shortener_warn;

pub const CONFIG_FILENAME: &str = "shortener.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Optional settings read from `shortener.ron`; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub max_body_bytes: u64,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let engine = ShortenSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_ms: None,
            request_timeout_ms: None,
            max_body_bytes: engine.max_body_bytes,
            log_file: PathBuf::from("shortener.log"),
        }
    }
}

impl AppConfig {
    pub fn shorten_settings(&self) -> ShortenSettings {
        ShortenSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Load the config file at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the shortening client from `config`.
///
/// An endpoint that does not parse is treated like an unreadable config file:
/// a warning is logged and the default endpoint is used instead.
pub fn build_shortener(config: &AppConfig) -> Result<ReqwestShortener, ShortenError> {
    let settings = config.shorten_settings();
    match ReqwestShortener::new(settings.clone()) {
        Err(err) if err.kind == FailureKind::InvalidEndpoint => {
            shortener_warn!(
                "Ignoring configured endpoint {:?} ({}); using {}",
                config.endpoint,
                err,
                DEFAULT_ENDPOINT
            );
            ReqwestShortener::new(ShortenSettings {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                ..settings
            })
        }
        other => other,
    }
}
