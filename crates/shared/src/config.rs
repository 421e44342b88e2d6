//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Inspection backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Location tracking configuration.
    #[serde(default)]
    pub tracking: TrackingConfig,
}

/// Inspection backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the REST API, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_request_timeout(),
        }
    }
}

/// Location tracking configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    /// Seconds between two sampling ticks.
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
    /// Ask the host for a high-accuracy fix.
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,
    /// Seconds the host may spend resolving one fix.
    #[serde(default = "default_sample_timeout")]
    pub timeout_secs: u64,
    /// Maximum age in seconds of a cached fix the host may return.
    #[serde(default = "default_max_cached_age")]
    pub max_cached_age_secs: u64,
}

fn default_interval() -> u64 {
    300 // 5 minutes
}

fn default_high_accuracy() -> bool {
    true
}

fn default_sample_timeout() -> u64 {
    15
}

fn default_max_cached_age() -> u64 {
    60
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            high_accuracy: default_high_accuracy(),
            timeout_secs: default_sample_timeout(),
            max_cached_age_secs: default_max_cached_age(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `INSPECTA__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("INSPECTA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            ["INSPECTA__BACKEND__BASE_URL", "INSPECTA__TRACKING__INTERVAL_SECS"],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.backend.base_url, "http://localhost:8000/api");
                assert_eq!(config.backend.timeout_secs, 30);
                assert_eq!(config.tracking.interval_secs, 300);
                assert!(config.tracking.high_accuracy);
                assert_eq!(config.tracking.timeout_secs, 15);
                assert_eq!(config.tracking.max_cached_age_secs, 60);
            },
        );
    }

    #[test]
    fn test_env_overrides_backend_url() {
        temp_env::with_var(
            "INSPECTA__BACKEND__BASE_URL",
            Some("https://inspections.example.org/api"),
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(
                    config.backend.base_url,
                    "https://inspections.example.org/api"
                );
                assert_eq!(config.tracking.interval_secs, 300);
            },
        );
    }
}
