//! Command implementations for caskr CLI

pub mod audit;
pub mod completions;
pub mod fetch;
pub mod helpers;
pub mod info;
pub mod list;
pub mod livecheck;
pub mod plan;
pub mod url;
pub mod verify;
pub mod version;
