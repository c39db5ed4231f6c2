//! Url command implementation

use std::path::PathBuf;

use crate::cli::CaskArgs;
use crate::error::Result;
use crate::resolver::resolve_download_url;

use super::helpers::open_tap;

/// Run url command
pub fn run(tap: Option<PathBuf>, args: CaskArgs) -> Result<()> {
    let descriptor = open_tap(tap)?.load(&args.cask)?;
    println!("{}", resolve_download_url(&descriptor)?);
    Ok(())
}
