//! Livecheck block of a descriptor

use serde::{Deserialize, Serialize};

/// Where livecheck looks for releases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LivecheckUrl {
    /// The descriptor's resolved download URL (`self` or `url`)
    #[default]
    Download,
    /// An explicit index URL
    Custom(String),
}

/// How the latest version is extracted from the release index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LivecheckStrategy {
    /// `tag_name` of the GitHub "latest release" of the repository
    GithubLatest,
    /// First capture group of `regex` matched against the fetched page
    PageMatch,
}

/// Livecheck policy, decoupled from install and uninstall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LivecheckSpec {
    #[serde(default)]
    pub url: LivecheckUrl,

    pub strategy: LivecheckStrategy,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl LivecheckSpec {
    pub fn validate(&self) -> std::result::Result<(), String> {
        match (self.strategy, &self.regex) {
            (LivecheckStrategy::PageMatch, None) => {
                Err("livecheck strategy page_match requires a regex".to_string())
            }
            (LivecheckStrategy::PageMatch, Some(pattern)) => {
                let compiled = regex::Regex::new(pattern)
                    .map_err(|e| format!("invalid livecheck regex: {e}"))?;
                if compiled.captures_len() < 2 {
                    return Err("livecheck regex needs a capture group".to_string());
                }
                Ok(())
            }
            (LivecheckStrategy::GithubLatest, Some(_)) => {
                Err("livecheck regex is only used by page_match".to_string())
            }
            (LivecheckStrategy::GithubLatest, None) => Ok(()),
        }
    }
}
