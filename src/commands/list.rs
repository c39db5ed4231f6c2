//! List command implementation

use std::path::PathBuf;

use crate::error::Result;

use super::helpers::open_tap;

/// Run list command
pub fn run(tap: Option<PathBuf>) -> Result<()> {
    let tap = open_tap(tap)?;
    let identifiers = tap.identifiers()?;

    if identifiers.is_empty() {
        println!("No casks in {}", tap.casks_dir().display());
        return Ok(());
    }

    for identifier in identifiers {
        println!("{identifier}");
    }
    Ok(())
}
