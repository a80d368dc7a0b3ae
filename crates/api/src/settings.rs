//! Server Settings

use config::{Config, Environment, File};
use data_validator::ValidationConfig;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::rate_limit::RateLimitConfig;

/// Default configuration file name (extension resolved by the loader)
pub const DEFAULT_CONFIG_FILE: &str = "segment-monitor";

/// Environment variable prefix, e.g. `SEGMENT_MONITOR_BIND_ADDR`
pub const ENV_PREFIX: &str = "SEGMENT_MONITOR";

/// Upper bound on samples per membership curve
pub const MAX_CURVE_POINTS: usize = 2000;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,
    /// Samples per membership curve when the request does not say
    pub curve_points: usize,
    /// Emit logs as JSON
    pub log_json: bool,
    /// Per-IP rate limiting
    pub rate_limit: RateLimitConfig,
    /// Accepted input ranges
    pub validation: ValidationConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            curve_points: 200,
            log_json: false,
            rate_limit: RateLimitConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration: defaults, then the optional config file, then
    /// environment variables. Nested keys use `__`, e.g.
    /// `SEGMENT_MONITOR_RATE_LIMIT__BURST_SIZE`.
    pub fn load(path: Option<&str>) -> Result<Self, ApiError> {
        let settings = Config::builder()
            .add_source(File::with_name(path.unwrap_or(DEFAULT_CONFIG_FILE)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: ServerConfig = settings.try_deserialize()?;
        config.curve_points = config.curve_points.clamp(1, MAX_CURVE_POINTS);
        Ok(config)
    }
}
