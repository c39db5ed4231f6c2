//! Package descriptor resolver
//!
//! Turns a descriptor into concrete, fully-resolved artifacts:
//! - [`template`]: download URL resolution
//! - [`integrity`]: artifact checksum verification
//! - [`install`]: install planning
//! - [`uninstall`]: uninstall and zap planning
//!
//! Every planner is a pure function of the descriptor and the [`HostEnv`];
//! executing a plan is the host's job.

pub mod host;
pub mod install;
pub mod integrity;
pub mod template;
pub mod uninstall;

pub use host::HostEnv;
pub use install::{InstallPlan, InstallStep, plan_install};
pub use integrity::{verify_artifact, verify_file};
pub use template::resolve_download_url;
pub use uninstall::{UninstallPlan, UninstallStep, UninstallWarning, plan_uninstall, survey};
