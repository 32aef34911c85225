//! Shell configuration.
//!
//! Loaded from YAML. Search order when no explicit path is given:
//! `$XDG_CONFIG_HOME/tumaninah/config.yaml`, then
//! `~/.config/tumaninah/config.yaml`. Missing files fall back to defaults.

use crate::error::ConfigError;
use crate::sections;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where prayer times are computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerLocation {
    /// ISO country code
    pub country: String,
    /// City name
    pub city: String,
}

impl Default for PrayerLocation {
    fn default() -> Self {
        Self {
            country: "EG".to_string(),
            city: "Cairo".to_string(),
        }
    }
}

/// Headless viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Tab shown after the splash
    pub initial_tab: String,
    /// How long the splash stays up
    pub splash_delay_ms: u64,
    /// Delay between switching to the adhkar list and opening a card
    pub settle_delay_ms: u64,
    /// Location handed to the prayer-times panel
    pub prayer_location: PrayerLocation,
    /// Viewport for headless runs
    pub viewport: Viewport,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_tab: sections::HOME.to_string(),
            splash_delay_ms: 2000,
            settle_delay_ms: 100,
            prayer_location: PrayerLocation::default(),
            viewport: Viewport::default(),
        }
    }
}

impl ShellConfig {
    /// XDG-style config paths to search, in order.
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("tumaninah/config.yaml"));
        }

        if let Ok(home) = std::env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/tumaninah/config.yaml"));
        }

        paths
    }

    /// Load from `path` if given, otherwise from the first existing search
    /// path, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        for candidate in Self::config_paths() {
            if candidate.exists() {
                return Self::load_from_file(&candidate);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load and validate a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading config");
        Self::from_yaml(&contents)
    }

    /// Parse and validate YAML. Missing keys take their defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            warn!("config file is empty, using defaults");
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check the invariants the shell relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_tab.is_empty() {
            return Err(ConfigError::EmptyInitialTab);
        }
        if !sections::is_known(&self.initial_tab) {
            return Err(ConfigError::UnknownInitialTab(self.initial_tab.clone()));
        }
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }

    /// Default configuration as a commented YAML document.
    pub fn default_yaml() -> String {
        r"# tumaninah configuration file
# Location: ~/.config/tumaninah/config.yaml

# Tab shown once the splash is dismissed
initial_tab: home

# Splash duration in milliseconds
splash_delay_ms: 2000

# Delay before a home card opens its adhkar list, in milliseconds
settle_delay_ms: 100

# Location used by the prayer-times panel
prayer_location:
  country: EG
  city: Cairo

# Viewport for headless runs
viewport:
  width: 1280.0
  height: 720.0
"
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.initial_tab, "home");
        assert_eq!(config.splash_delay_ms, 2000);
        assert_eq!(config.settle_delay_ms, 100);
        assert_eq!(config.prayer_location.country, "EG");
        assert_eq!(config.prayer_location.city, "Cairo");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_yaml_parses_to_default() {
        let parsed = ShellConfig::from_yaml(&ShellConfig::default_yaml()).unwrap();
        assert_eq!(parsed, ShellConfig::default());
    }

    #[test]
    fn test_to_yaml_round_trips() {
        let mut config = ShellConfig::default();
        config.prayer_location.city = "Alexandria".into();
        let parsed = ShellConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ShellConfig::from_yaml("initial_tab: calendar\n").unwrap();
        assert_eq!(config.initial_tab, "calendar");
        assert_eq!(config.splash_delay_ms, 2000);
        assert_eq!(config.prayer_location, PrayerLocation::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ShellConfig::from_yaml("  \n").unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            ShellConfig::from_yaml("initial_tab: ''\n"),
            Err(ConfigError::EmptyInitialTab)
        ));
        assert!(matches!(
            ShellConfig::from_yaml("initial_tab: settings\n"),
            Err(ConfigError::UnknownInitialTab(tab)) if tab == "settings"
        ));
        assert!(matches!(
            ShellConfig::from_yaml("viewport:\n  width: 0\n  height: 10\n"),
            Err(ConfigError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            ShellConfig::from_yaml("splash_delay_ms: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir()
            .join(format!("tumaninah-config-{}.yaml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "settle_delay_ms: 250").unwrap();

        let config = ShellConfig::load(Some(&path)).unwrap();
        assert_eq!(config.settle_delay_ms, 250);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = ShellConfig::load(Some(Path::new("/nonexistent/tumaninah.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/tumaninah.yaml"));
    }

    #[test]
    fn test_config_paths_end_with_app_file() {
        for path in ShellConfig::config_paths() {
            assert!(path.ends_with("tumaninah/config.yaml"));
        }
    }
}
