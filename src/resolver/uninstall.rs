//! Uninstall and zap planning
//!
//! Plans always quit the running application before any removal step so
//! the host never deletes files a live process still holds open.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::descriptor::PackageDescriptor;

use super::host::HostEnv;

/// One step of an uninstall, executed in order by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum UninstallStep {
    /// Ask the application to quit; best-effort
    Quit { bundle_id: String },
    /// Remove the installed bundle
    Remove { path: PathBuf },
    /// Remove a residual path; best-effort, only present for a zap
    Trash { path: PathBuf },
}

/// Fully-resolved uninstall plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UninstallPlan {
    pub identifier: String,
    pub zap: bool,
    pub steps: Vec<UninstallStep>,
}

impl UninstallPlan {
    /// Paths the plan removes, in order
    pub fn removal_targets(&self) -> impl Iterator<Item = &Path> {
        self.steps.iter().filter_map(|step| match step {
            UninstallStep::Remove { path } | UninstallStep::Trash { path } => Some(path.as_path()),
            UninstallStep::Quit { .. } => None,
        })
    }
}

/// Non-fatal finding about an uninstall plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UninstallWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for UninstallWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Plan an uninstall
///
/// With `zap`, every residual path is trashed exactly once, in declaration
/// order, after the bundle itself is removed.
pub fn plan_uninstall(descriptor: &PackageDescriptor, zap: bool, host: &HostEnv) -> UninstallPlan {
    let mut steps: Vec<UninstallStep> = descriptor
        .uninstall
        .quit
        .iter()
        .map(|bundle_id| UninstallStep::Quit {
            bundle_id: bundle_id.clone(),
        })
        .collect();

    let app_path = host.app_path(&descriptor.install_target);
    let mut seen: HashSet<PathBuf> = HashSet::new();
    seen.insert(app_path.clone());
    steps.push(UninstallStep::Remove { path: app_path });

    if zap {
        for raw in descriptor.residual_paths() {
            let path = host.expand_home(raw);
            if seen.insert(path.clone()) {
                steps.push(UninstallStep::Trash { path });
            } else {
                debug!(path = %path.display(), "skipping duplicate residual path");
            }
        }
    }

    UninstallPlan {
        identifier: descriptor.identifier.clone(),
        zap,
        steps,
    }
}

/// Report removal targets that do not exist on this machine
///
/// Missing paths are expected (the user may never have launched the app)
/// and only ever produce warnings.
pub fn survey(plan: &UninstallPlan) -> Vec<UninstallWarning> {
    plan.removal_targets()
        .filter(|path| std::fs::symlink_metadata(path).is_err())
        .map(|path| {
            debug!(path = %path.display(), "removal target not found");
            UninstallWarning {
                path: path.to_path_buf(),
                reason: "not found, nothing to remove".to_string(),
            }
        })
        .collect()
}
