//! Test fixtures shared by unit tests.
//!
//! The Plezy descriptor shipped in `Casks/` doubles as the canonical
//! fixture, so unit tests also keep the published tap honest.
//!
//! ```ignore
//! use crate::test_fixtures::{plezy, host_env, create_tap};
//!
//! #[test]
//! fn my_test() {
//!     let descriptor = plezy();
//!     let host = host_env();
//!     let (temp, tap) = create_tap(&[("plezy", PLEZY_YAML)]);
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use tempfile::TempDir;

use crate::descriptor::PackageDescriptor;
use crate::resolver::HostEnv;
use crate::tap::{CASKS_DIR, DESCRIPTOR_EXT, Tap};

/// The published Plezy descriptor
pub const PLEZY_YAML: &str = include_str!("../Casks/plezy.yaml");

/// Parse the published Plezy descriptor
///
/// # Panics
///
/// Panics if the shipped descriptor does not parse.
#[must_use]
pub fn plezy() -> PackageDescriptor {
    PackageDescriptor::from_yaml(PLEZY_YAML).expect("shipped plezy descriptor must parse")
}

/// Plezy descriptor with a different version and checksum
#[must_use]
pub fn plezy_at(version: &str, checksum: &str) -> PackageDescriptor {
    PackageDescriptor {
        version: version.to_string(),
        checksum: checksum.to_string(),
        ..plezy()
    }
}

/// Host environment with fixed, fake directories
#[must_use]
pub fn host_env() -> HostEnv {
    HostEnv::new(PathBuf::from("/Users/tester"), PathBuf::from("/Applications"))
}

/// Create a tap in a temp directory holding the given descriptors
///
/// # Panics
///
/// Panics if the temp directory or a descriptor file cannot be created.
#[must_use]
pub fn create_tap(casks: &[(&str, &str)]) -> (TempDir, Tap) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let casks_dir = temp.path().join(CASKS_DIR);
    std::fs::create_dir_all(&casks_dir).expect("Failed to create Casks directory");

    for (identifier, yaml) in casks {
        std::fs::write(
            casks_dir.join(format!("{identifier}.{DESCRIPTOR_EXT}")),
            yaml,
        )
        .expect("Failed to write descriptor");
    }

    let tap = Tap::open(temp.path()).expect("Failed to open tap");
    (temp, tap)
}
