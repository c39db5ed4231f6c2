//! Download URL template errors

use super::CaskError;

/// Creates a template error
pub fn invalid(template: impl Into<String>, reason: impl Into<String>) -> CaskError {
    CaskError::TemplateError {
        template: template.into(),
        reason: reason.into(),
    }
}
