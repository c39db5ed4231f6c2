//! Download URL template resolution
//!
//! Recognised placeholders are `#{version}` and `${version}`, optionally with
//! an accessor: `#{version.major}`, `.minor`, `.patch`, `.major_minor`,
//! `.no_dots`, `.csv.first` and `.csv.second`.

use tracing::debug;

use crate::descriptor::{PackageDescriptor, validate_version};
use crate::error::{Result, template};

const OPENERS: [&str; 2] = ["#{", "${"];

/// Resolve a descriptor's download URL
pub fn resolve_download_url(descriptor: &PackageDescriptor) -> Result<String> {
    let url = render(&descriptor.url_template, &descriptor.version)?;
    debug!(identifier = %descriptor.identifier, %url, "resolved download URL");
    Ok(url)
}

/// Substitute `version` into `template`
///
/// Fails when the template has no version placeholder, an unterminated or
/// unknown placeholder, or does not yield an absolute http(s) URL.
pub fn render(template_str: &str, version: &str) -> Result<String> {
    validate_version(version)
        .map_err(|reason| template::invalid(template_str, format!("malformed version: {reason}")))?;

    let mut output = String::with_capacity(template_str.len() + version.len());
    let mut rest = template_str;
    let mut substitutions = 0usize;

    while let Some((start, opener)) = next_opener(rest) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + opener.len()..];
        let end = after_open.find('}').ok_or_else(|| {
            template::invalid(template_str, format!("unterminated placeholder '{opener}'"))
        })?;

        let expression = after_open[..end].trim();
        let value = evaluate(expression, version)
            .map_err(|reason| template::invalid(template_str, reason))?;
        output.push_str(&value);
        substitutions += 1;
        rest = &after_open[end + 1..];
    }
    output.push_str(rest);

    if substitutions == 0 {
        return Err(template::invalid(template_str, "no version placeholder"));
    }

    let parsed = url::Url::parse(&output)
        .map_err(|e| template::invalid(template_str, format!("not a valid URL: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(template::invalid(
            template_str,
            format!("unsupported URL scheme '{}'", parsed.scheme()),
        ));
    }

    Ok(output)
}

/// Whether `text` holds a version placeholder, with or without an accessor
pub fn references_version(text: &str) -> bool {
    let mut rest = text;
    while let Some((start, opener)) = next_opener(rest) {
        rest = &rest[start + opener.len()..];
        if rest.trim_start().starts_with("version") {
            return true;
        }
    }
    false
}

/// Earliest placeholder opener in `text`
fn next_opener(text: &str) -> Option<(usize, &'static str)> {
    OPENERS
        .iter()
        .filter_map(|opener| text.find(opener).map(|idx| (idx, *opener)))
        .min_by_key(|(idx, _)| *idx)
}

fn evaluate(expression: &str, version: &str) -> std::result::Result<String, String> {
    let Some(accessor) = expression.strip_prefix("version") else {
        return Err(format!("unknown placeholder '{expression}'"));
    };

    let dotted = |index: usize| {
        version
            .split('.')
            .nth(index)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .ok_or_else(|| format!("version '{version}' has no component for '{expression}'"))
    };
    let csv = |index: usize| {
        version
            .split(',')
            .nth(index)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .ok_or_else(|| format!("version '{version}' has no component for '{expression}'"))
    };

    match accessor {
        "" => Ok(version.to_string()),
        ".major" => dotted(0),
        ".minor" => dotted(1),
        ".patch" => dotted(2),
        ".major_minor" => Ok(format!("{}.{}", dotted(0)?, dotted(1)?)),
        ".no_dots" => Ok(version.replace('.', "")),
        ".csv.first" => csv(0),
        ".csv.second" => csv(1),
        other => Err(format!("unknown version accessor '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaskError;
    use crate::test_fixtures::{plezy, plezy_at};

    #[test]
    fn test_resolve_plezy() {
        let url = resolve_download_url(&plezy()).unwrap();
        assert_eq!(
            url,
            "https://github.com/edde746/plezy/releases/download/1.14.0/plezy-macos.dmg"
        );
    }

    #[test]
    fn test_resolve_new_revision() {
        let descriptor = plezy_at("1.14.1", &"a".repeat(64));
        let url = resolve_download_url(&descriptor).unwrap();
        assert_eq!(
            url,
            "https://github.com/edde746/plezy/releases/download/1.14.1/plezy-macos.dmg"
        );
    }

    #[test]
    fn test_render_hash_placeholder() {
        assert_eq!(
            render("https://host/rel/#{version}/x.dmg", "1.14.1").unwrap(),
            "https://host/rel/1.14.1/x.dmg"
        );
    }

    #[test]
    fn test_render_dollar_placeholder() {
        assert_eq!(
            render("https://host/rel/${version}/x.dmg", "1.14.1").unwrap(),
            "https://host/rel/1.14.1/x.dmg"
        );
    }

    #[test]
    fn test_render_leaves_no_placeholder() {
        for version in ["1", "1.2", "1.14.1", "2024.10.01", "3.0.0-beta.2", "4.1,200"] {
            let out = render("https://host/#{version}/app-${version}.zip", version).unwrap();
            assert!(!out.contains("#{"), "residual placeholder in {out}");
            assert!(!out.contains("${"), "residual placeholder in {out}");
            assert_eq!(out.matches(version).count(), 2);
        }
    }

    #[test]
    fn test_render_accessors() {
        let t = "https://host/#{version.major}/#{version.major_minor}/#{version.no_dots}/#{version.patch}";
        assert_eq!(render(t, "1.14.1").unwrap(), "https://host/1/1.14/1141/1");
    }

    #[test]
    fn test_render_csv_accessors() {
        let t = "https://host/#{version.csv.first}/build-#{version.csv.second}.dmg";
        assert_eq!(
            render(t, "2.3.0,4711").unwrap(),
            "https://host/2.3.0/build-4711.dmg"
        );
    }

    #[test]
    fn test_render_missing_component() {
        let err = render("https://host/#{version.patch}", "1.2").unwrap_err();
        assert!(matches!(err, CaskError::TemplateError { .. }));
    }

    #[test]
    fn test_render_no_placeholder() {
        let err = render("https://host/rel/x.dmg", "1.0").unwrap_err();
        assert!(err.to_string().contains("no version placeholder"));
    }

    #[test]
    fn test_render_unterminated_placeholder() {
        let err = render("https://host/rel/#{version/x.dmg", "1.0").unwrap_err();
        assert!(matches!(err, CaskError::TemplateError { .. }));
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_render_unknown_placeholder() {
        let err = render("https://host/#{appdir}/#{version}", "1.0").unwrap_err();
        assert!(err.to_string().contains("unknown placeholder"));

        let err = render("https://host/#{version.reverse}", "1.0").unwrap_err();
        assert!(err.to_string().contains("unknown version accessor"));
    }

    #[test]
    fn test_render_rejects_non_http() {
        let err = render("file:///tmp/#{version}.dmg", "1.0").unwrap_err();
        assert!(err.to_string().contains("unsupported URL scheme"));
    }

    #[test]
    fn test_render_rejects_relative() {
        assert!(render("rel/#{version}/x.dmg", "1.0").is_err());
    }

    #[test]
    fn test_references_version() {
        assert!(references_version("~/Library/Plezy/#{version}"));
        assert!(references_version("~/Library/Plezy/${version.major}"));
        assert!(references_version("~/x/#{appdir}/#{ version.csv.first }"));
        assert!(!references_version("~/Library/Caches/com.edde746.plezy"));
        assert!(!references_version("~/Library/#{appdir}/version"));
    }

    #[test]
    fn test_render_rejects_malformed_version() {
        let err = render("https://host/#{version}", "1.0}").unwrap_err();
        assert!(err.to_string().contains("malformed version"));
    }
}
