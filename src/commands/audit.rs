//! Audit command implementation

use std::path::PathBuf;

use crate::cli::AuditArgs;
use crate::error::{Result, tap as tap_error};
use crate::tap::audit::audit;
use crate::ui::display::render_audit;

use super::helpers::{open_tap, print_json};

/// Run audit command; fails when any cask has problems
pub fn run(tap: Option<PathBuf>, args: AuditArgs) -> Result<()> {
    let findings = audit(&open_tap(tap)?)?;

    if args.json {
        print_json(&findings)?;
    } else {
        for finding in &findings {
            print!("{}", render_audit(finding));
        }
    }

    let failed = findings.iter().filter(|f| !f.is_clean()).count();
    if failed > 0 {
        return Err(tap_error::audit_failed(failed));
    }
    Ok(())
}
