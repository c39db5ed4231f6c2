//! Update discovery against upstream release indexes
//!
//! Livecheck is independent of install and uninstall: a failure here is a
//! `LivecheckError` for that cask only and never blocks anything else.

pub mod github;
pub mod http;
pub mod page;

use serde::Serialize;
use tracing::{debug, warn};

use crate::descriptor::{LivecheckSpec, LivecheckStrategy, LivecheckUrl, PackageDescriptor};
use crate::error::{CaskError, Result, livecheck};
use crate::resolver::resolve_download_url;

pub use http::HttpReleaseIndex;

/// Source of release index documents
///
/// Implemented over HTTP for real use and by in-memory fakes in tests.
pub trait ReleaseIndex {
    /// Fetch the document at `url` as text
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Result of checking one cask
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivecheckReport {
    pub identifier: String,
    pub current: String,
    pub latest: String,
    pub outdated: bool,
    /// The app updates itself; the report is informational only
    pub auto_updates: bool,
}

/// The strategy in effect for a descriptor
///
/// Descriptors without a livecheck block fall back to `github_latest` when
/// their download URL points at GitHub.
pub fn effective_spec(descriptor: &PackageDescriptor) -> Result<LivecheckSpec> {
    if let Some(spec) = &descriptor.livecheck {
        return Ok(spec.clone());
    }

    let url = resolve_download_url(descriptor)?;
    if github::repo_from_url(&url).is_some() {
        return Ok(LivecheckSpec {
            url: LivecheckUrl::Download,
            strategy: LivecheckStrategy::GithubLatest,
            regex: None,
        });
    }

    Err(livecheck::failed(
        &descriptor.identifier,
        "no livecheck block and the download URL is not on GitHub",
    ))
}

/// Latest upstream version according to `spec`
pub fn latest_version(
    descriptor: &PackageDescriptor,
    spec: &LivecheckSpec,
    index: &dyn ReleaseIndex,
) -> Result<String> {
    let fail = |reason: String| livecheck::failed(&descriptor.identifier, reason);

    let source_url = match &spec.url {
        LivecheckUrl::Download => resolve_download_url(descriptor)?,
        LivecheckUrl::Custom(url) => url.clone(),
    };

    let version = match spec.strategy {
        LivecheckStrategy::GithubLatest => {
            let (owner, repo) = github::repo_from_url(&source_url)
                .ok_or_else(|| fail(format!("not a GitHub repository URL: {source_url}")))?;
            let api_url = github::latest_release_url(&owner, &repo);
            debug!(identifier = %descriptor.identifier, %api_url, "querying latest release");
            let body = index.fetch(&api_url).map_err(|e| fail(e.to_string()))?;
            github::version_from_latest_release(&body).map_err(fail)?
        }
        LivecheckStrategy::PageMatch => {
            let pattern = spec
                .regex
                .as_deref()
                .ok_or_else(|| fail("page_match requires a regex".to_string()))?;
            debug!(identifier = %descriptor.identifier, url = %source_url, "matching page");
            let body = index.fetch(&source_url).map_err(|e| fail(e.to_string()))?;
            page::highest_match(&body, pattern).map_err(fail)?
        }
    };

    Ok(version)
}

/// Latest version if it differs from the descriptor's, else `None`
pub fn check_for_update(
    descriptor: &PackageDescriptor,
    spec: &LivecheckSpec,
    index: &dyn ReleaseIndex,
) -> Result<Option<String>> {
    let latest = latest_version(descriptor, spec, index)?;
    if latest == descriptor.version {
        Ok(None)
    } else {
        Ok(Some(latest))
    }
}

/// Check one cask and build its report
pub fn report(descriptor: &PackageDescriptor, index: &dyn ReleaseIndex) -> Result<LivecheckReport> {
    let spec = effective_spec(descriptor)?;
    let update = check_for_update(descriptor, &spec, index)?;
    let outdated = update.is_some();

    Ok(LivecheckReport {
        identifier: descriptor.identifier.clone(),
        current: descriptor.version.clone(),
        latest: update.unwrap_or_else(|| descriptor.version.clone()),
        outdated,
        auto_updates: descriptor.auto_updates,
    })
}

/// Check many casks; each failure is kept next to its identifier
pub fn report_all<'a>(
    descriptors: impl IntoIterator<Item = &'a PackageDescriptor>,
    index: &dyn ReleaseIndex,
) -> Vec<(String, std::result::Result<LivecheckReport, CaskError>)> {
    descriptors
        .into_iter()
        .map(|descriptor| {
            let outcome = report(descriptor, index);
            if let Err(e) = &outcome {
                warn!(identifier = %descriptor.identifier, error = %e, "livecheck failed");
            }
            (descriptor.identifier.clone(), outcome)
        })
        .collect()
}
