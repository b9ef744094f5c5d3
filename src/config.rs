use crate::error::AppError;
use crate::storage;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "CALORIE_API_URL";

/// Which food recognizer QuickLog uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerKind {
    /// Fixed suggestions, no network
    #[default]
    Mock,
    /// The backend's analyze-food endpoints
    Remote,
}

/// Contents of `config.toml` in the app data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub recognizer: RecognizerKind,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            recognizer: RecognizerKind::Mock,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Defaults, then `config.toml`, then the `CALORIE_API_URL` variable
    pub fn load() -> Self {
        let path = storage::app_data_dir().join("config.toml");
        let mut config = match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Ignoring invalid configuration: {}", e);
                Self::default()
            }
        };
        config.apply_env_override(std::env::var(API_URL_ENV).ok());
        log::info!(
            "Backend {} (recognizer: {:?})",
            config.api_base_url,
            config.recognizer
        );
        config
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        Ok(storage::load_toml::<Self>(path)?.unwrap_or_default())
    }

    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "recognizer = \"remote\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.recognizer, RecognizerKind::Remote);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_env_override_wins() {
        let mut config = AppConfig {
            api_base_url: "http://from-file:8000".to_string(),
            ..Default::default()
        };
        config.apply_env_override(Some("  ".to_string()));
        assert_eq!(config.api_base_url, "http://from-file:8000");

        config.apply_env_override(Some("https://api.example.com".to_string()));
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "recognizer = 5").unwrap();
        assert!(matches!(
            AppConfig::from_file(&path),
            Err(AppError::Config(_))
        ));
    }
}
