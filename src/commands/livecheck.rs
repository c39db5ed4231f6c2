//! Livecheck command implementation
//!
//! Livecheck failures are reported per cask and never fail the command.
//! Casks with `auto_updates` are checked like any other and annotated in
//! the output.

use std::path::PathBuf;

use console::Style;

use crate::cli::LivecheckArgs;
use crate::config;
use crate::descriptor::PackageDescriptor;
use crate::error::Result;
use crate::livecheck::{HttpReleaseIndex, LivecheckReport, report_all};
use crate::ui::display::render_livecheck;

use super::helpers::{open_tap, print_json};

/// Run livecheck command
pub fn run(tap: Option<PathBuf>, args: LivecheckArgs) -> Result<()> {
    let tap = open_tap(tap)?;
    let descriptors = select_descriptors(&tap, &args.casks)?;
    let index = HttpReleaseIndex::new(config::http_timeout())?;

    let results = report_all(&descriptors, &index);

    let mut reports: Vec<LivecheckReport> = Vec::new();
    for (identifier, outcome) in results {
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) => eprintln!(
                "{} {identifier}: {e}",
                Style::new().yellow().apply_to("Warning:")
            ),
        }
    }

    if args.outdated {
        reports.retain(|report| report.outdated);
    }

    if args.json {
        return print_json(&reports);
    }
    for report in &reports {
        println!("{}", render_livecheck(report));
    }
    Ok(())
}

/// Named casks must load; with no names, every loadable cask is checked
/// and the others are reported
fn select_descriptors(
    tap: &crate::tap::Tap,
    names: &[String],
) -> Result<Vec<PackageDescriptor>> {
    if !names.is_empty() {
        return names.iter().map(|name| tap.load(name)).collect();
    }

    let mut descriptors = Vec::new();
    for (identifier, loaded) in tap.load_all()? {
        match loaded {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(e) => eprintln!(
                "{} skipping {identifier}: {e}",
                Style::new().yellow().apply_to("Warning:")
            ),
        }
    }
    Ok(descriptors)
}
