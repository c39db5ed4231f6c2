//! Display functions for descriptors, plans and livecheck reports
//!
//! Renderers return strings so commands can print them and tests can
//! inspect them; styling is dropped automatically when stdout is not a
//! terminal.

use console::Style;
use std::fmt::Write;

use crate::descriptor::PackageDescriptor;
use crate::livecheck::LivecheckReport;
use crate::resolver::{InstallPlan, InstallStep, UninstallPlan, UninstallStep, UninstallWarning};
use crate::tap::audit::AuditFinding;

macro_rules! display_opt_field {
    ($out:expr, $label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            let _ = writeln!($out, "{} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

/// Descriptor summary for `caskr info`
pub fn render_descriptor(descriptor: &PackageDescriptor, url: Option<&str>) -> String {
    let mut out = String::new();
    let bold = Style::new().bold();

    let _ = writeln!(
        out,
        "{} {}",
        Style::new().bold().yellow().apply_to(&descriptor.identifier),
        descriptor.version
    );
    let _ = writeln!(out, "{} {}", bold.apply_to("Name:"), descriptor.display_name);
    display_opt_field!(out, "Description:", descriptor.description);
    display_opt_field!(out, "Homepage:", descriptor.homepage);
    display_opt_field!(out, "URL:", url);
    let _ = writeln!(out, "{} {}", bold.apply_to("SHA-256:"), descriptor.checksum);
    let _ = writeln!(out, "{} {}", bold.apply_to("App:"), descriptor.install_target);

    if descriptor.auto_updates {
        let _ = writeln!(out, "{} yes", bold.apply_to("Auto-updates:"));
    }
    if let Some(livecheck) = &descriptor.livecheck {
        let _ = writeln!(
            out,
            "{} {:?}",
            bold.apply_to("Livecheck:"),
            livecheck.strategy
        );
    }
    if !descriptor.uninstall.quit.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            bold.apply_to("Quits:"),
            descriptor.uninstall.quit.join(", ")
        );
    }
    if !descriptor.residual_paths().is_empty() {
        let _ = writeln!(out, "{}", bold.apply_to("Zap:"));
        for path in descriptor.residual_paths() {
            let _ = writeln!(out, "  {path}");
        }
    }

    out
}

/// Numbered install plan
pub fn render_install_plan(plan: &InstallPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {}",
        Style::new().bold().green().apply_to("Install plan for"),
        Style::new().bold().yellow().apply_to(&plan.identifier),
        plan.version
    );

    for (idx, step) in plan.steps.iter().enumerate() {
        let line = match step {
            InstallStep::Download { url, file_name } => format!("download {url} as {file_name}"),
            InstallStep::Verify { sha256 } => format!("verify sha256 {sha256}"),
            InstallStep::Extract { artifact } => format!("extract {artifact}"),
            InstallStep::Place { source, target } => {
                format!("place {source} at {}", target.display())
            }
            InstallStep::Run {
                command,
                args,
                sudo,
            } => {
                let prefix = if *sudo { "sudo " } else { "" };
                format!("run {prefix}{command} {}", args.join(" "))
                    .trim_end()
                    .to_string()
            }
        };
        let _ = writeln!(out, "  {}. {line}", idx + 1);
    }

    out
}

/// Numbered uninstall plan followed by survey warnings
pub fn render_uninstall_plan(plan: &UninstallPlan, warnings: &[UninstallWarning]) -> String {
    let mut out = String::new();
    let title = if plan.zap {
        "Zap plan for"
    } else {
        "Uninstall plan for"
    };
    let _ = writeln!(
        out,
        "{} {}",
        Style::new().bold().green().apply_to(title),
        Style::new().bold().yellow().apply_to(&plan.identifier)
    );

    for (idx, step) in plan.steps.iter().enumerate() {
        let line = match step {
            UninstallStep::Quit { bundle_id } => format!("quit {bundle_id} (if running)"),
            UninstallStep::Remove { path } => format!("remove {}", path.display()),
            UninstallStep::Trash { path } => format!("trash {}", path.display()),
        };
        let _ = writeln!(out, "  {}. {line}", idx + 1);
    }

    for warning in warnings {
        let _ = writeln!(
            out,
            "{} {warning}",
            Style::new().yellow().apply_to("Warning:")
        );
    }

    out
}

/// One livecheck line
pub fn render_livecheck(report: &LivecheckReport) -> String {
    let status = if report.outdated {
        Style::new().bold().red().apply_to("outdated")
    } else {
        Style::new().green().apply_to("up to date")
    };
    let mut line = format!(
        "{}: {} ==> {} ({status})",
        report.identifier, report.current, report.latest
    );
    if report.auto_updates && report.outdated {
        line.push_str(" [auto_updates]");
    }
    line
}

/// Audit findings for one cask
pub fn render_audit(finding: &AuditFinding) -> String {
    let mut out = String::new();
    if finding.is_clean() {
        let _ = writeln!(
            out,
            "{}: {}",
            finding.identifier,
            Style::new().green().apply_to("ok")
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{}: {} problem(s)",
        Style::new().bold().red().apply_to(&finding.identifier),
        finding.problems.len()
    );
    for problem in &finding.problems {
        let _ = writeln!(out, "  - {problem}");
    }
    out
}
