//! Plan command implementation
//!
//! Plans are printed, never executed: placing files and signalling
//! processes is the host installer's job.

use std::path::PathBuf;

use crate::cli::{PlanCommands, PlanInstallArgs, PlanUninstallArgs};
use crate::error::Result;
use crate::resolver::{HostEnv, plan_install, plan_uninstall, survey};
use crate::ui::display::{render_install_plan, render_uninstall_plan};

use super::helpers::{open_tap, print_json};

/// Run plan command
pub fn run(tap: Option<PathBuf>, appdir: PathBuf, command: PlanCommands) -> Result<()> {
    let host = HostEnv::detect(appdir)?;
    match command {
        PlanCommands::Install(args) => install(tap, &host, &args),
        PlanCommands::Uninstall(args) => uninstall(tap, &host, &args),
    }
}

fn install(tap: Option<PathBuf>, host: &HostEnv, args: &PlanInstallArgs) -> Result<()> {
    let descriptor = open_tap(tap)?.load(&args.cask)?;
    let plan = plan_install(&descriptor, host)?;

    if args.json {
        return print_json(&plan);
    }
    print!("{}", render_install_plan(&plan));
    Ok(())
}

fn uninstall(tap: Option<PathBuf>, host: &HostEnv, args: &PlanUninstallArgs) -> Result<()> {
    let descriptor = open_tap(tap)?.load(&args.cask)?;
    let plan = plan_uninstall(&descriptor, args.zap, host);
    let warnings = survey(&plan);

    if args.json {
        return print_json(&serde_json::json!({
            "plan": plan,
            "warnings": warnings,
        }));
    }
    print!("{}", render_uninstall_plan(&plan, &warnings));
    Ok(())
}
