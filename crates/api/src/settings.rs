//! Service Settings
//!
//! Layered configuration: built-in defaults, then an optional config file
//! (`avrisk.toml` unless `AVRISK_CONFIG` names another), then `AVRISK__`
//! environment variables, e.g. `AVRISK__METAR__TOKEN`.

use crate::error::ApiError;
use crate::rate_limit::RateLimitConfig;
use data_validator::ValidationConfig;
use metar_client::MetarConfig;
use serde::Deserialize;

/// Config file used when `AVRISK_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "avrisk";

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Risk model settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// ONNX export of the trained classifier
    pub path: String,
    /// Serve with a lookup stub instead of the trained model
    pub mock: bool,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: "models/weather_risk_model.onnx".to_string(),
            mock: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Max level: trace, debug, info, warn or error
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete service settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub metar: MetarConfig,
    pub rate_limit: RateLimitConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load from the file named by `AVRISK_CONFIG` (or the default) plus environment
    pub fn load() -> Result<Self, ApiError> {
        let path =
            std::env::var("AVRISK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_file(&path)
    }

    /// Load from a specific file (which may be absent) plus environment
    pub fn from_file(path: &str) -> Result<Self, ApiError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("AVRISK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ApiError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.addr, "0.0.0.0:8080");
        assert!(!settings.model.mock);
        assert_eq!(settings.metar.base_url, "https://avwx.rest");
        assert!(settings.validation.enabled);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::from_file("/nonexistent/avrisk-settings").unwrap();
        assert_eq!(settings.model.path, "models/weather_risk_model.onnx");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join("avrisk_settings_test.toml");
        std::fs::write(
            &path,
            r#"
[server]
addr = "127.0.0.1:9090"

[model]
mock = true

[metar]
timeout_ms = 2500

[logging]
json = true
"#,
        )
        .unwrap();

        let settings = Settings::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.server.addr, "127.0.0.1:9090");
        assert!(settings.model.mock);
        assert_eq!(settings.metar.timeout_ms, 2500);
        assert_eq!(settings.metar.base_url, "https://avwx.rest");
        assert!(settings.logging.json);

        let _ = std::fs::remove_file(&path);
    }
}
