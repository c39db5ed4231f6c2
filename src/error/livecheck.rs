//! Livecheck errors

use super::CaskError;

/// Creates a livecheck failure error
pub fn failed(identifier: impl Into<String>, reason: impl Into<String>) -> CaskError {
    CaskError::LivecheckError {
        identifier: identifier.into(),
        reason: reason.into(),
    }
}
