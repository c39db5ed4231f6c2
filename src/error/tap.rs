//! Tap errors

use super::CaskError;

/// Creates a tap not found error
pub fn not_found(path: impl Into<String>) -> CaskError {
    CaskError::TapNotFound { path: path.into() }
}

/// Creates a cask not found error
pub fn cask_not_found(identifier: impl Into<String>) -> CaskError {
    CaskError::CaskNotFound {
        identifier: identifier.into(),
    }
}

/// Creates an audit failure error
pub fn audit_failed(count: usize) -> CaskError {
    CaskError::AuditFailed { count }
}
