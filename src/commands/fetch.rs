//! Fetch command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::CaskArgs;
use crate::config;
use crate::download;
use crate::error::Result;

use super::helpers::open_tap;

/// Run fetch command
pub fn run(tap: Option<PathBuf>, args: CaskArgs) -> Result<()> {
    let descriptor = open_tap(tap)?.load(&args.cask)?;
    let path = download::fetch(
        &descriptor,
        &config::downloads_dir()?,
        config::http_timeout(),
    )?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Downloaded and verified:"),
        path.display()
    );
    Ok(())
}
