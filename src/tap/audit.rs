//! Tap-wide descriptor audit

use std::collections::HashSet;

use serde::Serialize;

use crate::descriptor::PackageDescriptor;
use crate::error::Result;
use crate::resolver::resolve_download_url;
use crate::resolver::template::references_version;

use super::Tap;

/// Problems found for one cask
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFinding {
    pub identifier: String,
    pub problems: Vec<String>,
}

impl AuditFinding {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Audit every descriptor in the tap
pub fn audit(tap: &Tap) -> Result<Vec<AuditFinding>> {
    Ok(tap
        .load_all()?
        .into_iter()
        .map(|(identifier, loaded)| {
            let problems = match loaded {
                Ok(descriptor) => audit_descriptor(&descriptor),
                Err(e) => vec![e.to_string()],
            };
            AuditFinding {
                identifier,
                problems,
            }
        })
        .collect())
}

/// Problems with a descriptor that parsing and validation accept
pub fn audit_descriptor(descriptor: &PackageDescriptor) -> Vec<String> {
    let mut problems = Vec::new();

    if let Err(e) = resolve_download_url(descriptor) {
        problems.push(e.to_string());
    }

    if let Some(homepage) = &descriptor.homepage {
        if url::Url::parse(homepage).is_err() {
            problems.push(format!("homepage is not a valid URL: {homepage}"));
        }
    }

    let mut seen = HashSet::new();
    for path in descriptor.residual_paths() {
        if references_version(path) {
            problems.push(format!("zap path depends on the version: {path}"));
        }
        if !seen.insert(path.as_str()) {
            problems.push(format!("duplicate zap path: {path}"));
        }
    }

    if descriptor.auto_updates && descriptor.livecheck.is_none() {
        problems.push("auto_updates casks should declare a livecheck block".to_string());
    }

    problems
}
