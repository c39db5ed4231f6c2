//! `github_latest` strategy helpers

use serde::Deserialize;

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

const GITHUB_API: &str = "https://api.github.com";

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Owner and repository of a github.com URL
pub fn repo_from_url(url: &str) -> Option<(String, String)> {
    let parsed = url::Url::parse(url).ok()?;
    if !GITHUB_HOSTS.contains(&parsed.host_str()?) {
        return None;
    }

    let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?.trim_end_matches(".git");
    if repo.is_empty() {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}

/// API endpoint for the latest non-prerelease release
pub fn latest_release_url(owner: &str, repo: &str) -> String {
    format!("{GITHUB_API}/repos/{owner}/{repo}/releases/latest")
}

/// Version from a "latest release" API response
pub fn version_from_latest_release(body: &str) -> std::result::Result<String, String> {
    let release: LatestRelease = serde_json::from_str(body)
        .map_err(|e| format!("unexpected GitHub API response: {e}"))?;
    let version = strip_tag_prefix(release.tag_name.trim());
    if version.is_empty() {
        return Err("latest release has an empty tag".to_string());
    }
    Ok(version.to_string())
}

/// `v1.2.3` -> `1.2.3`; other tags are returned unchanged
pub fn strip_tag_prefix(tag: &str) -> &str {
    match tag.strip_prefix(['v', 'V']) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => tag,
    }
}
