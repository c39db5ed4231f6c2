//! Common test utilities for caskr integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// The published Plezy descriptor
pub const PLEZY_YAML: &str = include_str!("../../Casks/plezy.yaml");

/// A temporary tap for integration tests
pub struct TestTap {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to tap root
    pub path: PathBuf,
}

impl TestTap {
    /// Create an empty tap (a directory with Casks/)
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("Casks")).expect("Failed to create Casks directory");
        Self { temp, path }
    }

    /// Create a tap holding the published Plezy descriptor
    pub fn with_plezy() -> Self {
        let tap = Self::new();
        tap.write_cask("plezy", PLEZY_YAML);
        tap
    }

    /// Write a descriptor file
    pub fn write_cask(&self, identifier: &str, yaml: &str) {
        std::fs::write(
            self.path.join("Casks").join(format!("{identifier}.yaml")),
            yaml,
        )
        .expect("Failed to write descriptor");
    }

    /// Write an arbitrary file relative to the tap root
    pub fn write_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

/// Plezy descriptor rewritten to a given version and checksum
pub fn plezy_yaml_at(version: &str, checksum: &str) -> String {
    PLEZY_YAML
        .replace("version: \"1.14.0\"", &format!("version: \"{version}\""))
        .replace(
            "6c89c325d707828c654582b7a2950d7d5a18c89862c6ab46ab685c6cec3ee9ce",
            checksum,
        )
}
