use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub spatial: SpatialSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Spatial query backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct SpatialSettings {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_rpc_name")]
    pub rpc_name: String,
}

fn default_rpc_name() -> String {
    "nearby_movers".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Minimum provider rating passed through to the backend pre-filter.
    /// Deployment config owns the real value; 0.0 disables the filter.
    #[serde(default)]
    pub min_rating: f64,
    pub max_radius_km: Option<f64>,
    pub query_timeout_secs: Option<u64>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_rating: 0.0,
            max_radius_km: None,
            query_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MOVER_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. MOVER_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MOVER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // Short-form env vars used by deployment tooling
        if let Ok(endpoint) = std::env::var("SPATIAL_ENDPOINT") {
            builder = builder.set_override("spatial.endpoint", endpoint)?;
        }
        if let Ok(api_key) = std::env::var("SPATIAL_API_KEY") {
            builder = builder.set_override("spatial.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MOVER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching_settings() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.min_rating, 0.0);
        assert!(matching.max_radius_km.is_none());
        assert!(matching.query_timeout_secs.is_none());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
