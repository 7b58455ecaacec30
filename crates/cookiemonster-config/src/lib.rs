//! Settings file parsing for HGI Cookie Monster.
//!
//! Loads the process configuration from a TOML file with one table per
//! section. Every key is required: a missing or malformed key is a startup
//! error and no partially populated configuration is ever returned.
//!
//! ```toml
//! [retrieval]
//! log = "sqlite:///var/lib/cookiemonster/retrieval.db"
//! period = 60.0
//! since = 0
//!
//! [cookiejar]
//! url = "http://couchdb:5984"
//! database = "hgi-cookiejar"
//! max_requests_per_second = 50
//!
//! [processing]
//! max_threads = 8
//! rules = "rules.toml"
//! notification_receivers = "receivers.toml"
//! enrichment_loaders = "loaders.toml"
//!
//! [baton]
//! bin = "/software/baton/bin"
//! zone = "seq"
//!
//! [api]
//! port = 5000
//!
//! [influxdb]
//! host = "influxdb"
//! port = 8086
//! username = "cookiemonster"
//! password = "secret"
//! database = "cookiemonster"
//! ```

#![warn(missing_docs)]

mod config;
mod error;

pub use config::{
    ApiConfig, BatonSettings, CookieJarConfig, CookieMonsterConfig, InfluxDbConfig,
    ProcessingConfig, RetrievalConfig,
};
pub use error::ConfigError;
