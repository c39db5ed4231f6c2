//! Shared helpers for commands

use std::path::{Path, PathBuf};

use crate::error::{CaskError, Result, tap as tap_error};
use crate::tap::Tap;

/// Open the tap given on the command line, or the nearest one above the
/// current directory
pub fn open_tap(tap: Option<PathBuf>) -> Result<Tap> {
    match tap {
        Some(path) => Tap::open(&path),
        None => {
            let current_dir = std::env::current_dir().map_err(|e| CaskError::IoError {
                message: format!("Failed to get current directory: {e}"),
            })?;
            find_tap(&current_dir)
        }
    }
}

fn find_tap(start: &Path) -> Result<Tap> {
    let root =
        Tap::find_from(start).ok_or_else(|| tap_error::not_found(start.display().to_string()))?;
    Tap::open(&root)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
