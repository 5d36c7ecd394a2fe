//! Configuration types for skyscan.
//!
//! [`Config::load`] layers, in order: the embedded defaults, an optional TOML
//! file, then the environment variables in [`ENV_OVERRIDES`]. The result is
//! built once at startup and passed down by reference; nothing reads the
//! environment after that. [`Config::defaults`] returns the embedded defaults
//! without touching the filesystem or environment (useful in tests).

use crate::pipeline::AdmissionPolicy;
use crate::types::BoundingBox;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[upstream]
base_url     = "https://opensky-network.org/api/states/all"
timeout_secs = 15

[query]
lamin   = "35.5"
lamax   = "42.5"
lomin   = "25.5"
lomax   = "45.5"
country = "Turkey"

[server]
host = "0.0.0.0"
port = 5000

[pipeline]
admission = "lenient"
"#;

/// Environment variable → config key. Each one, when set, wins over the file.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("LAMIN", "query.lamin"),
    ("LAMAX", "query.lamax"),
    ("LOMIN", "query.lomin"),
    ("LOMAX", "query.lomax"),
    ("COUNTRY", "query.country"),
    ("OPEN_SKY_API", "upstream.base_url"),
    ("OPEN_SKY_TIMEOUT_SECS", "upstream.timeout_secs"),
    ("HOST", "server.host"),
    ("PORT", "server.port"),
    ("ADMISSION_POLICY", "pipeline.admission"),
];

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub query: QueryConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// `[upstream]` — where state vectors come from.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[query]` — defaults used when a request does not override them.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    pub lamin: String,
    pub lamax: String,
    pub lomin: String,
    pub lomax: String,
    pub country: String,
}

impl QueryConfig {
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(&self.lamin, &self.lamax, &self.lomin, &self.lomax)
    }
}

/// `[server]` — listening address.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[pipeline]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub admission: AdmissionPolicy,
}

/// A loaded config that parses but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("upstream.base_url must not be empty")]
    EmptyBaseUrl,
    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the embedded defaults, `path` (if given), and the process
    /// environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(path, |var| std::env::var(var).ok())
    }

    /// Like [`Config::load`], reading overrides through `env` instead of the
    /// process environment.
    pub fn load_with<F>(path: Option<&Path>, env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        for &(var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(key, env(var))?;
        }

        let cfg: Config = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
