//! Configuration file and output path management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Get the configuration directory for dfa-check
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("dfa-check"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}",
            ext
        )),
        None => Err(anyhow::anyhow!("Config file must have .json extension")),
    }
}

/// Result file path for an input file: same directory and stem, new extension
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    let mut path = input.to_path_buf();
    path.set_extension(extension);
    path
}

/// User settings, stored as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extension of result files written next to input files
    pub output_extension: String,
    /// Check inputs in parallel by default
    pub parallel: bool,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_extension: "out".to_string(),
            parallel: false,
            color: true,
        }
    }
}

impl Config {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if a file exists there, and built-in defaults otherwise.
    pub fn load(custom_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom_path {
            validate_config_path(path)?;
            return Self::load_from(path);
        }

        match default_config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        if config.output_extension.is_empty() || config.output_extension.contains(['/', '\\']) {
            anyhow::bail!(
                "Invalid output_extension {:?}",
                config.output_extension
            );
        }
        Ok(config)
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply command-line overrides
    pub fn merge_with_cli(&self, no_color: bool) -> Self {
        Self {
            color: self.color && !no_color,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("data/strings.in"), "out"),
            PathBuf::from("data/strings.out")
        );
        assert_eq!(
            output_path(Path::new("strings"), "out"),
            PathBuf::from("strings.out")
        );
        assert_eq!(
            output_path(Path::new("a.b.in"), "res"),
            PathBuf::from("a.b.res")
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_extension, "out");
    }

    #[test]
    fn test_config_partial() {
        let config = Config::from_json(r#"{"parallel": true}"#).unwrap();
        assert!(config.parallel);
        assert!(config.color);
    }

    #[test]
    fn test_config_rejects_bad_extension() {
        assert!(Config::from_json(r#"{"output_extension": ""}"#).is_err());
        assert!(Config::from_json(r#"{"output_extension": "a/b"}"#).is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let config = Config::default();
        assert!(!config.merge_with_cli(true).color);
        assert!(config.merge_with_cli(false).color);
    }

    #[test]
    fn test_validate_config_path() {
        assert!(validate_config_path(Path::new("settings.json")).is_ok());
        assert!(validate_config_path(Path::new("settings.toml")).is_err());
        assert!(validate_config_path(Path::new("settings")).is_err());
    }
}
