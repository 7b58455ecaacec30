//! Configuration sections and loading

use crate::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Complete process configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CookieMonsterConfig {
    /// Retrieval of iRODS updates
    pub retrieval: RetrievalConfig,

    /// Cookie jar (persistence) connection
    #[serde(rename = "cookiejar")]
    pub cookie_jar: CookieJarConfig,

    /// Cookie processing
    pub processing: ProcessingConfig,

    /// baton installation
    pub baton: BatonSettings,

    /// HTTP API
    pub api: ApiConfig,

    /// InfluxDB metrics sink
    pub influxdb: InfluxDbConfig,
}

/// `[retrieval]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RetrievalConfig {
    /// Location of the retrieval log database
    #[serde(rename = "log")]
    pub log_database: String,

    /// Seconds between retrieval runs
    pub period: f64,

    /// Retrieve updates made after this time (seconds since Unix epoch)
    pub since: u64,
}

impl RetrievalConfig {
    /// Retrieval period as a duration
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.period)
    }

    /// Retrieval start time
    pub fn since_time(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.since)
    }
}

/// `[cookiejar]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CookieJarConfig {
    /// Database server URL
    pub url: String,

    /// Database name
    pub database: String,

    /// Request rate limit
    pub max_requests_per_second: u32,
}

/// `[processing]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessingConfig {
    /// Number of worker threads
    pub max_threads: usize,

    /// Rule definitions file
    #[serde(rename = "rules")]
    pub rules_location: PathBuf,

    /// Notification receiver definitions file
    #[serde(rename = "notification_receivers")]
    pub notification_receivers_location: PathBuf,

    /// Enrichment loader definitions file
    #[serde(rename = "enrichment_loaders")]
    pub enrichment_loaders_location: PathBuf,
}

/// `[baton]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatonSettings {
    /// Directory containing the baton binaries
    #[serde(rename = "bin")]
    pub binaries_location: PathBuf,

    /// iRODS zone
    pub zone: String,
}

/// `[api]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Port the HTTP API listens on
    pub port: u16,
}

/// `[influxdb]` section
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct InfluxDbConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Username
    pub username: String,

    /// Password
    pub password: String,

    /// Database name
    pub database: String,
}

impl fmt::Debug for InfluxDbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfluxDbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

impl CookieMonsterConfig {
    /// Load configuration from a TOML file
    ///
    /// Relative paths in `[processing]` are resolved against the directory
    /// containing the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        if let Some(base) = path.parent() {
            config.processing.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: CookieMonsterConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if Duration::try_from_secs_f64(self.retrieval.period).is_err() || self.retrieval.period <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "retrieval.period",
                reason: format!("must be a positive number of seconds, got {}", self.retrieval.period),
            });
        }
        if self.cookie_jar.url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "cookiejar.url",
                reason: "cannot be empty".to_string(),
            });
        }
        if self.cookie_jar.max_requests_per_second == 0 {
            return Err(ConfigError::Invalid {
                field: "cookiejar.max_requests_per_second",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.processing.max_threads == 0 {
            return Err(ConfigError::Invalid {
                field: "processing.max_threads",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.baton.zone.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "baton.zone",
                reason: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl ProcessingConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        for location in [
            &mut self.rules_location,
            &mut self.notification_receivers_location,
            &mut self.enrichment_loaders_location,
        ] {
            if location.is_relative() {
                *location = base.join(&*location);
            }
        }
    }
}
