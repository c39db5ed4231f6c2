//! caskr - cask tap tool
//!
//! Reads cask descriptors (declarative package metadata for macOS desktop
//! applications) from a tap and turns them into resolved download URLs,
//! verified artifacts, install/uninstall plans and livecheck reports. Plans
//! are executed by a host installer, never by caskr itself.
//!
//! The operations live in [`resolver`] and [`livecheck`]; [`tap`] finds and
//! loads descriptors; [`commands`] wires them to the CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod download;
pub mod error;
pub mod livecheck;
pub mod logging;
pub mod progress;
pub mod resolver;
pub mod tap;
#[cfg(test)]
mod test_fixtures;
pub mod ui;

pub use descriptor::PackageDescriptor;
pub use error::{CaskError, Result};
pub use resolver::HostEnv;
pub use tap::Tap;
