//! Version command implementation
//!
//! Besides the build, reports where caskr reads casks from and caches
//! downloads, so a bug report carries the environment it ran in.

use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::tap::Tap;

use super::helpers::open_tap;

/// Run version command
///
/// A missing tap is reported, not an error.
pub fn run(tap: Option<PathBuf>) -> Result<()> {
    println!("caskr {}", env!("CARGO_PKG_VERSION"));
    println!("  Rust: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!(
        "  Profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );
    println!();
    println!("Environment:");
    println!("  Tap: {}", describe_tap(open_tap(tap).ok().as_ref()));
    println!(
        "  Cache: {}",
        config::cache_dir().map_or_else(|e| format!("unavailable ({e})"), |p| p.display().to_string())
    );

    Ok(())
}

fn describe_tap(tap: Option<&Tap>) -> String {
    let Some(tap) = tap else {
        return "none found".to_string();
    };
    let count = tap.identifiers().map_or(0, |ids| ids.len());
    format!("{} ({count} cask(s))", tap.root().display())
}
