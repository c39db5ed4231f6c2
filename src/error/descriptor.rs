//! Descriptor errors

use super::CaskError;

/// Creates a descriptor parse failure error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CaskError {
    CaskError::DescriptorParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid descriptor error
pub fn invalid(identifier: impl Into<String>, message: impl Into<String>) -> CaskError {
    CaskError::DescriptorInvalid {
        identifier: identifier.into(),
        message: message.into(),
    }
}
