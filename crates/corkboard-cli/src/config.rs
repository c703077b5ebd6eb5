//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use corkboard::{CorkboardError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for CorkboardError {
    fn from(err: ConfigError) -> Self {
        CorkboardError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (corkboard/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CorkboardError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("corkboard/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "corkboard", "corkboard") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CorkboardError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(Into::into)
}

fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use corkboard::arrange::ArrangeStrategy;

    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [arrange]
            strategy = "masonry"
            padding = 10.0

            [alignment]
            snap = false
            "#,
        )
        .unwrap();

        assert_eq!(config.arrange().strategy(), ArrangeStrategy::Masonry);
        assert_eq!(config.arrange().padding(), 10.0);
        assert_eq!(config.arrange().margin(), 20.0);
        assert!(!config.alignment().snap());
        assert_eq!(config.alignment().threshold(), 8.0);
    }

    #[test]
    fn test_parse_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config.arrange().strategy(), ArrangeStrategy::Grid);
        assert_eq!(config.canvas().fit_padding(), 50.0);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("[arrange]\nstrategy = \"spiral\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("/definitely/not/here/config.toml")).unwrap_err();
        assert!(matches!(err, CorkboardError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas]\nfit_padding = 10.0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.canvas().fit_padding(), 10.0);
    }
}
