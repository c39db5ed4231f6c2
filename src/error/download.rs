//! Download errors

use super::CaskError;

/// Creates a download failure error
pub fn failed(url: impl Into<String>, reason: impl Into<String>) -> CaskError {
    CaskError::DownloadError {
        url: url.into(),
        reason: reason.into(),
    }
}
