//! Tap: a directory holding cask descriptors under `Casks/`

pub mod audit;

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::descriptor::{PackageDescriptor, is_valid_identifier};
use crate::error::{Result, descriptor, tap};

/// Directory inside a tap holding descriptors
pub const CASKS_DIR: &str = "Casks";

/// Descriptor file extension
pub const DESCRIPTOR_EXT: &str = "yaml";

/// An opened tap
#[derive(Debug, Clone)]
pub struct Tap {
    root: PathBuf,
}

impl Tap {
    /// Check if a directory is a tap root
    pub fn exists(path: &Path) -> bool {
        path.join(CASKS_DIR).is_dir()
    }

    /// Find a tap root by walking up from `start`
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Open an existing tap
    pub fn open(root: &Path) -> Result<Self> {
        if !Self::exists(root) {
            return Err(tap::not_found(root.display().to_string()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn casks_dir(&self) -> PathBuf {
        self.root.join(CASKS_DIR)
    }

    /// Path of the descriptor file for an identifier
    pub fn descriptor_path(&self, identifier: &str) -> PathBuf {
        self.casks_dir()
            .join(format!("{identifier}.{DESCRIPTOR_EXT}"))
    }

    /// Sorted identifiers of every descriptor file in the tap
    pub fn identifiers(&self) -> Result<Vec<String>> {
        let mut identifiers = Vec::new();

        for entry in WalkDir::new(self.casks_dir()).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| crate::error::CaskError::IoError {
                message: e.to_string(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(DESCRIPTOR_EXT)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                identifiers.push(stem.to_string());
            }
        }

        identifiers.sort();
        Ok(identifiers)
    }

    /// Load and validate one descriptor
    ///
    /// The descriptor's `identifier` must match its file name.
    pub fn load(&self, identifier: &str) -> Result<PackageDescriptor> {
        if !is_valid_identifier(identifier) {
            return Err(tap::cask_not_found(identifier));
        }

        let path = self.descriptor_path(identifier);
        if !path.is_file() {
            return Err(tap::cask_not_found(identifier));
        }

        debug!(path = %path.display(), "loading descriptor");
        let loaded = PackageDescriptor::from_file(&path)?;
        if loaded.identifier != identifier {
            return Err(descriptor::invalid(
                identifier,
                format!(
                    "identifier '{}' does not match file name '{identifier}.{DESCRIPTOR_EXT}'",
                    loaded.identifier
                ),
            ));
        }
        Ok(loaded)
    }

    /// Load every descriptor; failures are kept per identifier
    pub fn load_all(&self) -> Result<Vec<(String, Result<PackageDescriptor>)>> {
        Ok(self
            .identifiers()?
            .into_iter()
            .map(|identifier| {
                let loaded = self.load(&identifier);
                (identifier, loaded)
            })
            .collect())
    }
}
