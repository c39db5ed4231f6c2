//! Install planning

use std::path::PathBuf;

use serde::Serialize;

use crate::descriptor::PackageDescriptor;
use crate::error::Result;

use super::host::HostEnv;
use super::template::resolve_download_url;

/// One step of an install, executed in order by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum InstallStep {
    Download { url: String, file_name: String },
    Verify { sha256: String },
    Extract { artifact: String },
    Place { source: String, target: PathBuf },
    Run {
        command: String,
        args: Vec<String>,
        sudo: bool,
    },
}

/// Fully-resolved install plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    pub identifier: String,
    pub version: String,
    pub steps: Vec<InstallStep>,
}

/// Plan an install: download, verify, extract, place the bundle, then run
/// every postflight action in declaration order
pub fn plan_install(descriptor: &PackageDescriptor, host: &HostEnv) -> Result<InstallPlan> {
    let url = resolve_download_url(descriptor)?;
    let file_name = artifact_file_name(&url)
        .unwrap_or_else(|| format!("{}-{}", descriptor.identifier, descriptor.version));

    let mut steps = vec![
        InstallStep::Download {
            url,
            file_name: file_name.clone(),
        },
        InstallStep::Verify {
            sha256: descriptor.checksum.to_ascii_lowercase(),
        },
        InstallStep::Extract {
            artifact: file_name,
        },
        InstallStep::Place {
            source: descriptor.install_target.clone(),
            target: host.app_path(&descriptor.install_target),
        },
    ];

    steps.extend(
        descriptor
            .post_install_actions
            .iter()
            .map(|action| InstallStep::Run {
                command: host.expand_appdir(&action.command),
                args: action
                    .args
                    .iter()
                    .map(|arg| host.expand_appdir(arg))
                    .collect(),
                sudo: action.sudo,
            }),
    );

    Ok(InstallPlan {
        identifier: descriptor.identifier.clone(),
        version: descriptor.version.clone(),
        steps,
    })
}

/// Last non-empty path segment of a URL
pub fn artifact_file_name(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
}
