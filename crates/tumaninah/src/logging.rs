//! Log subscriber setup for the binary.

use crate::error::ShellError;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`, or at `default_level`
/// when it is unset or invalid.
pub fn init(default_level: &str) -> Result<(), ShellError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ShellError::Logging(err.to_string()))
}
