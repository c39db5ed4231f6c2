//! `page_match` strategy helpers

use std::cmp::Ordering;

use regex::Regex;

/// Highest version captured by `pattern`'s first group anywhere in `body`
pub fn highest_match(body: &str, pattern: &str) -> std::result::Result<String, String> {
    let regex = Regex::new(pattern).map_err(|e| format!("invalid livecheck regex: {e}"))?;

    regex
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .filter(|version| !version.is_empty())
        .max_by(|a, b| compare_versions(a, b))
        .ok_or_else(|| "livecheck regex matched nothing".to_string())
}

/// Natural ordering of version strings: numeric runs compare as numbers,
/// everything else as text; separators are ignored. A version extended by
/// a textual token (a prerelease tag) ranks below the version itself.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = tokens(a);
    let right = tokens(b);

    for (l, r) in left.iter().zip(&right) {
        let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
            (Ok(l), Ok(r)) => l.cmp(&r),
            (Ok(_), Err(_)) => Ordering::Greater,
            (Err(_), Ok(_)) => Ordering::Less,
            (Err(_), Err(_)) => l.cmp(r),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    // "1.0-beta" sorts below "1.0"; "1.0.1" above it
    match (left.get(right.len()), right.get(left.len())) {
        (Some(extra), None) if is_prerelease(extra) => Ordering::Less,
        (None, Some(extra)) if is_prerelease(extra) => Ordering::Greater,
        _ => left.len().cmp(&right.len()),
    }
}

fn is_prerelease(token: &str) -> bool {
    token.parse::<u64>().is_err()
}

fn tokens(version: &str) -> Vec<&str> {
    let mut out = Vec::new();
    // (start, numeric) of the run being scanned
    let mut run: Option<(usize, bool)> = None;

    for (idx, c) in version.char_indices() {
        let class = if c.is_ascii_digit() {
            Some(true)
        } else if c.is_alphanumeric() {
            Some(false)
        } else {
            None
        };

        match (run, class) {
            (Some((_, numeric)), Some(is_numeric)) if numeric == is_numeric => {}
            (Some((start, _)), _) => {
                out.push(&version[start..idx]);
                run = class.map(|is_numeric| (idx, is_numeric));
            }
            (None, _) => run = class.map(|is_numeric| (idx, is_numeric)),
        }
    }

    if let Some((start, _)) = run {
        out.push(&version[start..]);
    }
    out
}
