//! Info command implementation

use std::path::PathBuf;

use crate::cli::InfoArgs;
use crate::error::Result;
use crate::resolver::resolve_download_url;
use crate::ui::display::render_descriptor;

use super::helpers::{open_tap, print_json};

/// Run info command
pub fn run(tap: Option<PathBuf>, args: InfoArgs) -> Result<()> {
    let descriptor = open_tap(tap)?.load(&args.cask)?;

    if args.json {
        return print_json(&descriptor);
    }

    // Info is still useful for a descriptor whose template is broken
    let url = resolve_download_url(&descriptor).ok();
    print!("{}", render_descriptor(&descriptor, url.as_deref()));
    Ok(())
}
