//! Library-level tests for descriptor resolution, verification and planning

mod common;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use caskr::livecheck::{ReleaseIndex, report, report_all};
use caskr::resolver::integrity::sha256_hex;
use caskr::resolver::{
    InstallStep, UninstallStep, plan_install, plan_uninstall, resolve_download_url,
    verify_artifact, verify_file,
};
use caskr::{CaskError, HostEnv, PackageDescriptor, Tap};
use common::{PLEZY_YAML, TestTap, plezy_yaml_at};

struct StaticIndex {
    documents: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl StaticIndex {
    fn new(documents: &[(&str, &str)]) -> Self {
        Self {
            documents: documents
                .iter()
                .map(|(url, body)| ((*url).to_string(), (*body).to_string()))
                .collect(),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl ReleaseIndex for StaticIndex {
    fn fetch(&self, url: &str) -> caskr::Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| CaskError::DownloadError {
                url: url.to_string(),
                reason: "HTTP 404".to_string(),
            })
    }
}

const LATEST_RELEASE_API: &str = "https://api.github.com/repos/edde746/plezy/releases/latest";

fn host() -> HostEnv {
    HostEnv::new(PathBuf::from("/Users/tester"), PathBuf::from("/Applications"))
}

fn plezy_at(version: &str, checksum: &str) -> PackageDescriptor {
    PackageDescriptor::from_yaml(&plezy_yaml_at(version, checksum)).unwrap()
}

#[test]
fn test_shipped_tap_loads_plezy() {
    let tap = Tap::open(std::path::Path::new(env!("CARGO_MANIFEST_DIR"))).unwrap();
    let descriptor = tap.load("plezy").unwrap();
    assert_eq!(descriptor.version, "1.14.0");
    assert_eq!(
        resolve_download_url(&descriptor).unwrap(),
        "https://github.com/edde746/plezy/releases/download/1.14.0/plezy-macos.dmg"
    );
}

#[test]
fn test_resolve_is_deterministic_and_tracks_version() {
    let descriptor = plezy_at("1.14.1", &"a".repeat(64));
    let first = resolve_download_url(&descriptor).unwrap();
    let second = resolve_download_url(&descriptor).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "https://github.com/edde746/plezy/releases/download/1.14.1/plezy-macos.dmg"
    );
}

#[test]
fn test_verify_accepts_only_the_exact_artifact() {
    let artifact = b"plezy disk image bytes".to_vec();
    let descriptor = plezy_at("1.14.1", &sha256_hex(&artifact));
    assert!(verify_artifact(&artifact, &descriptor).is_ok());

    let mut truncated = artifact.clone();
    truncated.pop();
    assert!(matches!(
        verify_artifact(&truncated, &descriptor),
        Err(CaskError::IntegrityError { .. })
    ));

    let mut flipped = artifact;
    flipped[0] ^= 0x01;
    assert!(matches!(
        verify_artifact(&flipped, &descriptor),
        Err(CaskError::IntegrityError { .. })
    ));
}

#[test]
fn test_verify_checksum_is_case_insensitive() {
    let artifact = b"bytes";
    let descriptor = plezy_at("1.14.1", &sha256_hex(artifact).to_uppercase());
    assert!(verify_artifact(artifact, &descriptor).is_ok());
}

#[test]
fn test_verify_file_on_disk() {
    let tap = TestTap::new();
    let file = tap.write_file("plezy-macos.dmg", b"on disk");
    let descriptor = plezy_at("1.14.1", &sha256_hex(b"on disk"));
    assert!(verify_file(&file, &descriptor).is_ok());

    let missing = tap.path.join("missing.dmg");
    assert!(matches!(
        verify_file(&missing, &descriptor),
        Err(CaskError::FileReadFailed { .. })
    ));
}

#[test]
fn test_install_plan_order() {
    let descriptor = PackageDescriptor::from_yaml(PLEZY_YAML).unwrap();
    let plan = plan_install(&descriptor, &host()).unwrap();

    let kinds: Vec<&str> = plan
        .steps
        .iter()
        .map(|step| match step {
            InstallStep::Download { .. } => "download",
            InstallStep::Verify { .. } => "verify",
            InstallStep::Extract { .. } => "extract",
            InstallStep::Place { .. } => "place",
            InstallStep::Run { .. } => "run",
        })
        .collect();
    assert_eq!(kinds, ["download", "verify", "extract", "place", "run"]);

    match &plan.steps[4] {
        InstallStep::Run { command, args, sudo } => {
            assert_eq!(command, "/usr/bin/xattr");
            assert_eq!(args, &["-cr", "/Applications/Plezy.app"]);
            assert!(!sudo);
        }
        other => panic!("Expected run step, got {other:?}"),
    }
}

#[test]
fn test_uninstall_without_zap_keeps_user_data() {
    let descriptor = PackageDescriptor::from_yaml(PLEZY_YAML).unwrap();
    let plan = plan_uninstall(&descriptor, false, &host());
    assert_eq!(
        plan.steps,
        vec![
            UninstallStep::Quit {
                bundle_id: "com.edde746.plezy".to_string()
            },
            UninstallStep::Remove {
                path: PathBuf::from("/Applications/Plezy.app")
            },
        ]
    );
}

#[test]
fn test_zap_targets_are_a_superset_of_uninstall() {
    let descriptor = PackageDescriptor::from_yaml(PLEZY_YAML).unwrap();
    let plain = plan_uninstall(&descriptor, false, &host());
    let zap = plan_uninstall(&descriptor, true, &host());

    let zap_targets: Vec<_> = zap.removal_targets().collect();
    for target in plain.removal_targets() {
        assert!(zap_targets.contains(&target));
    }
    assert_eq!(zap_targets.len(), 7);
    assert!(zap_targets.contains(&std::path::Path::new(
        "/Users/tester/Library/Caches/com.edde746.plezy"
    )));
}

#[test]
fn test_livecheck_reports_newer_release() {
    let descriptor = PackageDescriptor::from_yaml(PLEZY_YAML).unwrap();
    let index = StaticIndex::new(&[(LATEST_RELEASE_API, r#"{"tag_name": "v1.14.1"}"#)]);

    let report = report(&descriptor, &index).unwrap();
    assert!(report.outdated);
    assert_eq!(report.current, "1.14.0");
    assert_eq!(report.latest, "1.14.1");
    assert!(report.auto_updates);
    assert_eq!(*index.requests.borrow(), [LATEST_RELEASE_API]);
}

#[test]
fn test_livecheck_up_to_date() {
    let descriptor = PackageDescriptor::from_yaml(PLEZY_YAML).unwrap();
    let index = StaticIndex::new(&[(LATEST_RELEASE_API, r#"{"tag_name": "1.14.0"}"#)]);

    let report = report(&descriptor, &index).unwrap();
    assert!(!report.outdated);
    assert_eq!(report.latest, "1.14.0");
}

#[test]
fn test_livecheck_failure_is_per_cask() {
    let plezy = PackageDescriptor::from_yaml(PLEZY_YAML).unwrap();
    let other_yaml = PLEZY_YAML
        .replace("identifier: plezy", "identifier: other")
        .replace("edde746/plezy", "someone/other");
    let other = PackageDescriptor::from_yaml(&other_yaml).unwrap();
    let index = StaticIndex::new(&[(LATEST_RELEASE_API, r#"{"tag_name": "1.14.1"}"#)]);

    let results = report_all([&other, &plezy], &index);
    assert_eq!(results.len(), 2);
    assert!(matches!(
        results[0].1,
        Err(CaskError::LivecheckError { .. })
    ));
    assert_eq!(results[1].1.as_ref().unwrap().latest, "1.14.1");
}
