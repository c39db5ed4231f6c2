//! File system errors

use super::CaskError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> CaskError {
    CaskError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> CaskError {
    CaskError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
