//! Artifact download into the local cache
//!
//! Downloads land in a temporary file next to their final location and are
//! only persisted after the checksum verifies.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::descriptor::PackageDescriptor;
use crate::error::{CaskError, Result, download, fs};
use crate::livecheck::http::build_client;
use crate::progress::DownloadProgress;
use crate::resolver::install::artifact_file_name;
use crate::resolver::{resolve_download_url, verify_file};

/// Cache file name for a descriptor's artifact: `<identifier>--<version>--<file>`
pub fn cache_file_name(descriptor: &PackageDescriptor, url: &str) -> String {
    let file = artifact_file_name(url).unwrap_or_else(|| "artifact".to_string());
    format!("{}--{}--{}", descriptor.identifier, descriptor.version, file)
}

/// Download the artifact into `downloads_dir` and verify it
///
/// A cached file that still verifies is reused; one that does not is
/// removed and downloaded again. A fresh download that fails verification
/// is discarded and the `IntegrityError` returned.
pub fn fetch(
    descriptor: &PackageDescriptor,
    downloads_dir: &Path,
    timeout: Duration,
) -> Result<PathBuf> {
    let url = resolve_download_url(descriptor)?;
    let target = downloads_dir.join(cache_file_name(descriptor, &url));

    if target.is_file() {
        match verify_file(&target, descriptor) {
            Ok(()) => {
                info!(path = %target.display(), "using cached download");
                return Ok(target);
            }
            Err(e) => {
                warn!(path = %target.display(), error = %e, "discarding stale cached download");
                std::fs::remove_file(&target)
                    .map_err(|e| fs::write_failed(target.display().to_string(), e.to_string()))?;
            }
        }
    }

    std::fs::create_dir_all(downloads_dir)
        .map_err(|e| fs::write_failed(downloads_dir.display().to_string(), e.to_string()))?;

    let partial = download_to_temp(&url, downloads_dir, timeout)?;
    verify_file(partial.path(), descriptor)?;

    partial
        .persist(&target)
        .map_err(|e| fs::write_failed(target.display().to_string(), e.error.to_string()))?;
    debug!(path = %target.display(), "download verified and stored");

    Ok(target)
}

fn download_to_temp(
    url: &str,
    dir: &Path,
    timeout: Duration,
) -> Result<tempfile::NamedTempFile> {
    let client = build_client(timeout)?;
    let response = client
        .get(url)
        .send()
        .map_err(|e| download::failed(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(download::failed(url, format!("HTTP {}", status.as_u16())));
    }

    let mut partial = tempfile::Builder::new()
        .prefix(".caskr-")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|e| fs::write_failed(dir.display().to_string(), e.to_string()))?;

    let file_name = artifact_file_name(url).unwrap_or_default();
    let progress = DownloadProgress::new(response.content_length(), &file_name);
    let mut reader = progress.wrap_read(response);

    if let Err(e) = std::io::copy(&mut reader, partial.as_file_mut()) {
        progress.abandon();
        return Err(CaskError::DownloadError {
            url: url.to_string(),
            reason: e.to_string(),
        });
    }
    progress.finish();

    Ok(partial)
}
