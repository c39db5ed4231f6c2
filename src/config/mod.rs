//! Configuration from environment variables and platform directories
//!
//! CLI flags win over these; these win over the built-in defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CaskError, Result};

/// Overrides the download cache directory
pub const CACHE_DIR_ENV: &str = "CASKR_CACHE_DIR";

/// Tap directory (also a `--tap` default)
pub const TAP_ENV: &str = "CASKR_TAP";

/// Installation root (also an `--appdir` default)
pub const APPDIR_ENV: &str = "CASKR_APPDIR";

/// `tracing` filter directives
pub const LOG_ENV: &str = "CASKR_LOG";

/// HTTP timeout in seconds
pub const HTTP_TIMEOUT_ENV: &str = "CASKR_HTTP_TIMEOUT";

/// Default cache directory name under the user's cache directory
const CACHE_DIR: &str = "caskr";

/// Downloads subdirectory within cache
pub const DOWNLOADS_DIR: &str = "downloads";

pub const DEFAULT_APPDIR: &str = "/Applications";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Get the cache directory path
///
/// Uses the platform's standard cache location (e.g. XDG on Linux,
/// Library/Caches on macOS) with a `caskr` subdirectory. Can be overridden
/// with the `CASKR_CACHE_DIR` environment variable.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var(CACHE_DIR_ENV) {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir().ok_or_else(|| CaskError::IoError {
        message: "Could not determine cache directory".to_string(),
    })?;

    Ok(base.join(CACHE_DIR))
}

/// Get the downloads cache directory path
pub fn downloads_dir() -> Result<PathBuf> {
    Ok(cache_dir()?.join(DOWNLOADS_DIR))
}

/// HTTP timeout; unparsable values fall back to the default
pub fn http_timeout() -> Duration {
    let secs = std::env::var(HTTP_TIMEOUT_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
