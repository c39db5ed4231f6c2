//! Integrity errors

use super::CaskError;

/// Creates a checksum mismatch error
pub fn mismatch(
    identifier: impl Into<String>,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> CaskError {
    CaskError::IntegrityError {
        identifier: identifier.into(),
        expected: expected.into(),
        actual: actual.into(),
    }
}
