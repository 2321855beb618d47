// Configuration management

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::AppConfig;

/// Environment variable that overrides the configured service URL
pub const API_URL_ENV: &str = "BLOG_API_URL";

pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("blogsmith");

    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    Ok(config_dir)
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Load the config file (writing defaults on first run) and apply the
/// environment override.
pub fn load_config() -> Result<AppConfig> {
    let config = load_config_from(&get_config_path()?)?;
    Ok(apply_env_override(config, std::env::var(API_URL_ENV).ok()))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let default_config = AppConfig::default();
        save_config_to(path, &default_config)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(path).context("Failed to read config file")?;

    let config: AppConfig = toml::from_str(&contents).context("Failed to parse config file")?;

    Ok(config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, contents).context("Failed to write config file")?;

    Ok(())
}

/// The URL is taken as-is; a bad value only shows up when a request fails.
pub fn apply_env_override(mut config: AppConfig, api_url: Option<String>) -> AppConfig {
    if let Some(url) = api_url.filter(|url| !url.is_empty()) {
        config.api_url = url;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_creates_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert!(path.exists(), "default config should be written on first load");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = AppConfig {
            api_url: "http://custom:5000".to_string(),
            progress_unit_ms: 10,
            download_dir: Some("/tmp/blogs".to_string()),
            ..Default::default()
        };
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.api_url, "http://custom:5000");
        assert_eq!(loaded.progress_unit_ms, 10);
        assert_eq!(loaded.download_dir.as_deref(), Some("/tmp/blogs"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "api_url = \"http://api.example\"\n").unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.api_url, "http://api.example");
        assert_eq!(loaded.request_timeout, 600);
        assert_eq!(loaded.progress_unit_ms, 100);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "api_url = [").unwrap();

        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_env_override() {
        let config = apply_env_override(
            AppConfig::default(),
            Some("http://remote:9000".to_string()),
        );
        assert_eq!(config.api_url, "http://remote:9000");

        let config = apply_env_override(AppConfig::default(), None);
        assert_eq!(config.api_url, "http://localhost:8080");

        let config = apply_env_override(AppConfig::default(), Some(String::new()));
        assert_eq!(config.api_url, "http://localhost:8080");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config);
        assert!(serialized.is_ok());

        let deserialized: Result<AppConfig, _> = toml::from_str(&serialized.unwrap());
        assert!(deserialized.is_ok());
    }
}
