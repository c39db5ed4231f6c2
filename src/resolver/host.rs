//! Host environment supplied to the planners

use std::path::PathBuf;

use crate::error::{CaskError, Result};

/// Placeholder for the installation root inside postflight arguments
pub const APPDIR_PLACEHOLDER: &str = "#{appdir}";

/// Directories owned by the host installer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnv {
    /// The user's home directory, target of `~` expansion
    pub home_dir: PathBuf,
    /// Installation root for application bundles
    pub appdir: PathBuf,
}

impl HostEnv {
    pub fn new(home_dir: PathBuf, appdir: PathBuf) -> Self {
        Self { home_dir, appdir }
    }

    /// Build from the current user's home directory
    pub fn detect(appdir: PathBuf) -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| CaskError::IoError {
            message: "Could not determine home directory".to_string(),
        })?;
        Ok(Self::new(home_dir, appdir))
    }

    /// Expand a leading `~` (alone or followed by `/`) to the home directory
    pub fn expand_home(&self, path: &str) -> PathBuf {
        if path == "~" {
            return self.home_dir.clone();
        }
        match path.strip_prefix("~/") {
            Some(rest) => self.home_dir.join(rest),
            None => PathBuf::from(path),
        }
    }

    /// Replace every `#{appdir}` in an argument
    pub fn expand_appdir(&self, arg: &str) -> String {
        arg.replace(APPDIR_PLACEHOLDER, &self.appdir.display().to_string())
    }

    /// Location of an installed bundle
    pub fn app_path(&self, install_target: &str) -> PathBuf {
        self.appdir.join(install_target)
    }
}
