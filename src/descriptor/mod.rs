//! Cask descriptor (Casks/<identifier>.yaml) main module
//!
//! A descriptor is the immutable record of one installable version of one
//! application. It is read-only at install time; a new upstream release
//! produces a new descriptor revision with `version` and `sha256` changed
//! together.

pub mod livecheck;
pub mod serialization;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, descriptor, fs};

pub use livecheck::{LivecheckSpec, LivecheckStrategy, LivecheckUrl};

/// Length of a hex-encoded SHA-256 digest
pub const CHECKSUM_HEX_LEN: usize = 64;

/// Package descriptor as stored in a tap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageDescriptor {
    /// Stable lowercase token, the package's unique key
    pub identifier: String,

    /// Current upstream release
    pub version: String,

    /// Hex SHA-256 of the artifact published for `version`
    #[serde(rename = "sha256")]
    pub checksum: String,

    /// Download URL with a version placeholder
    #[serde(rename = "url")]
    pub url_template: String,

    /// Human-readable product name
    #[serde(rename = "name")]
    pub display_name: String,

    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub livecheck: Option<LivecheckSpec>,

    /// The application keeps itself up to date
    #[serde(default)]
    pub auto_updates: bool,

    /// Bundle directory created inside the appdir
    #[serde(rename = "app")]
    pub install_target: String,

    /// Commands run once, in order, after the bundle is placed
    #[serde(
        rename = "postflight",
        default,
        with = "serialization::one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub post_install_actions: Vec<PostflightAction>,

    #[serde(default)]
    pub uninstall: UninstallSpec,

    #[serde(default)]
    pub zap: ZapSpec,
}

/// A command run after installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostflightAction {
    pub command: String,

    /// Arguments; `#{appdir}` is expanded by the planner
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub sudo: bool,
}

/// How to stop the application before removing it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UninstallSpec {
    /// Bundle identifiers to signal quit to
    #[serde(default, with = "serialization::one_or_many")]
    pub quit: Vec<String>,
}

/// Paths removed only on a full removal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZapSpec {
    #[serde(default)]
    pub trash: Vec<String>,
}

impl PackageDescriptor {
    /// Parse a descriptor from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let descriptor: Self = serde_yaml::from_str(yaml)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Read, parse and validate a descriptor file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

        let parsed: Self = serde_yaml::from_str(&content)
            .map_err(|e| descriptor::parse_failed(path.display().to_string(), e.to_string()))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Residual paths exactly as written (before home expansion)
    pub fn residual_paths(&self) -> &[String] {
        &self.zap.trash
    }

    /// Validate field contents
    ///
    /// The URL template is not checked here; resolution reports template
    /// problems as `TemplateError`.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| descriptor::invalid(&self.identifier, message);

        if !is_valid_identifier(&self.identifier) {
            return Err(invalid(
                "identifier must be lowercase letters, digits and '-', starting with a letter or digit",
            ));
        }

        validate_version(&self.version).map_err(|reason| invalid(&reason))?;

        if !is_valid_checksum(&self.checksum) {
            return Err(invalid("sha256 must be 64 hex characters"));
        }

        if self.display_name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }

        if self.install_target.trim().is_empty()
            || self.install_target.contains('/')
            || self.install_target == ".."
        {
            return Err(invalid("app must be a bundle name without path separators"));
        }

        for action in &self.post_install_actions {
            if action.command.trim().is_empty() {
                return Err(invalid("postflight command must not be empty"));
            }
        }

        if self.uninstall.quit.iter().any(|id| id.trim().is_empty()) {
            return Err(invalid("uninstall quit identifiers must not be empty"));
        }

        if self.zap.trash.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid("zap trash paths must not be empty"));
        }

        if let Some(livecheck) = &self.livecheck {
            livecheck.validate().map_err(|reason| invalid(&reason))?;
        }

        Ok(())
    }
}

/// Check an identifier: `[a-z0-9][a-z0-9-]*`
pub fn is_valid_identifier(identifier: &str) -> bool {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Check a checksum: 64 hex characters, either case
pub fn is_valid_checksum(checksum: &str) -> bool {
    checksum.len() == CHECKSUM_HEX_LEN && checksum.chars().all(|c| c.is_ascii_hexdigit())
}

/// Check a version string, returning the reason when it is unusable
pub fn validate_version(version: &str) -> std::result::Result<(), String> {
    if version.is_empty() {
        return Err("version must not be empty".to_string());
    }
    if let Some(bad) = version
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | '{' | '}'))
    {
        return Err(format!("version contains invalid character {bad:?}"));
    }
    Ok(())
}
