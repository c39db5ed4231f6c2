//! Error types and handling for caskr
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Descriptor parsing and validation errors
//! - [`tap`]: Tap lookup errors
//! - [`template`]: Download URL template errors
//! - [`integrity`]: Checksum mismatch errors
//! - [`download`]: Artifact download errors
//! - [`livecheck`]: Update check errors
//! - [`fs`]: File system errors

pub mod descriptor;
pub mod download;
pub mod fs;
pub mod integrity;
pub mod livecheck;
pub mod tap;
pub mod template;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for caskr operations
#[derive(Error, Diagnostic, Debug)]
pub enum CaskError {
    // Descriptor errors
    #[error("Failed to parse cask descriptor {path}: {reason}")]
    #[diagnostic(
        code(caskr::descriptor::parse_failed),
        help("Check the YAML syntax and that only known keys are used")
    )]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Invalid cask descriptor '{identifier}': {message}")]
    #[diagnostic(code(caskr::descriptor::invalid))]
    DescriptorInvalid { identifier: String, message: String },

    // Tap errors
    #[error("Tap not found at: {path}")]
    #[diagnostic(
        code(caskr::tap::not_found),
        help("A tap is a directory containing a Casks/ subdirectory. Use --tap or CASKR_TAP")
    )]
    TapNotFound { path: String },

    #[error("Cask '{identifier}' not found")]
    #[diagnostic(
        code(caskr::tap::cask_not_found),
        help("Run 'caskr list' to see the casks available in this tap")
    )]
    CaskNotFound { identifier: String },

    #[error("Audit found problems in {count} cask(s)")]
    #[diagnostic(code(caskr::tap::audit_failed))]
    AuditFailed { count: usize },

    // Template errors
    #[error("Invalid download URL template '{template}': {reason}")]
    #[diagnostic(
        code(caskr::template::invalid),
        help("The url must contain a version placeholder and resolve to an absolute http(s) URL")
    )]
    TemplateError { template: String, reason: String },

    // Integrity errors
    #[error("Checksum mismatch for '{identifier}': expected {expected}, got {actual}")]
    #[diagnostic(
        code(caskr::integrity::mismatch),
        help("The artifact does not match the descriptor's sha256. Do not install it")
    )]
    IntegrityError {
        identifier: String,
        expected: String,
        actual: String,
    },

    // Download errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(caskr::download::failed),
        help("Check your network connection and retry")
    )]
    DownloadError { url: String, reason: String },

    // Livecheck errors
    #[error("Livecheck failed for '{identifier}': {reason}")]
    #[diagnostic(code(caskr::livecheck::failed))]
    LivecheckError { identifier: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(caskr::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(caskr::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(caskr::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(caskr::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CaskError {
    fn from(err: std::io::Error) -> Self {
        CaskError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CaskError {
    fn from(err: serde_yaml::Error) -> Self {
        CaskError::DescriptorParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CaskError {
    fn from(err: serde_json::Error) -> Self {
        CaskError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CaskError>;
