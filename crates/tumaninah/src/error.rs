//! Error types for the shell and its configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for [`ShellConfig`](crate::ShellConfig).
    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// `initial_tab` is empty.
    #[error("initial_tab must not be empty")]
    EmptyInitialTab,

    /// `initial_tab` names no section.
    #[error("unknown initial_tab '{0}'")]
    UnknownInitialTab(String),

    /// The viewport has no area.
    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport {
        /// Configured width
        width: f32,
        /// Configured height
        height: f32,
    },
}

/// Errors from running the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A scripted step could not be parsed.
    #[error("invalid script step '{step}': {reason}")]
    InvalidStep {
        /// The step as given
        step: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Session frames could not be rendered as YAML.
    #[error("failed to render frames: {0}")]
    Output(#[source] serde_yaml_ng::Error),

    /// The log subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::UnknownInitialTab("settings".into()).to_string(),
            "unknown initial_tab 'settings'"
        );
        assert_eq!(
            ConfigError::EmptyInitialTab.to_string(),
            "initial_tab must not be empty"
        );
    }

    #[test]
    fn test_shell_error_wraps_config_transparently() {
        let err = ShellError::from(ConfigError::EmptyInitialTab);
        assert_eq!(err.to_string(), "initial_tab must not be empty");
    }

    #[test]
    fn test_invalid_step_message() {
        let err = ShellError::InvalidStep {
            step: "card:noon".into(),
            reason: "expected morning or evening",
        };
        assert_eq!(
            err.to_string(),
            "invalid script step 'card:noon': expected morning or evening"
        );
    }
}
