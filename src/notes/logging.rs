//! Logging bootstrap for the binary.
//!
//! Library code only emits `tracing` events. Installing a subscriber is the
//! binary's job, done once at startup through [`init_logging`]. Log output goes
//! to stderr so it never mixes with command output on stdout.

use crate::error::{NotesError, Result};
use tracing_subscriber::EnvFilter;

const SUPPORTED_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Installs the global `tracing` subscriber at the given level.
///
/// Calling this again after a subscriber is installed is a no-op.
///
/// # Errors
/// Returns an error when `level` is not one of the supported level names.
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(level, "logging initialized");
    }
    Ok(())
}

/// Lowercases and checks a level name.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    let wanted = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|candidate| **candidate == wanted)
        .copied()
        .ok_or_else(|| {
            NotesError::InvalidConfig(format!(
                "unsupported log level `{}` (expected one of: {})",
                level,
                SUPPORTED_LEVELS.join(", ")
            ))
        })
}
