//! Verify command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::VerifyArgs;
use crate::error::Result;
use crate::resolver::verify_file;

use super::helpers::open_tap;

/// Run verify command
pub fn run(tap: Option<PathBuf>, args: VerifyArgs) -> Result<()> {
    let descriptor = open_tap(tap)?.load(&args.cask)?;
    verify_file(&args.file, &descriptor)?;

    println!(
        "{} {} matches {} {}",
        Style::new().green().bold().apply_to("Verified:"),
        args.file.display(),
        descriptor.identifier,
        descriptor.version
    );
    Ok(())
}
