//! SHA-256 verification of downloaded artifacts
//!
//! This is the only check that gates installation. The comparison walks
//! every byte of both digests; a prefix match is never accepted.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::descriptor::PackageDescriptor;
use crate::error::{Result, fs, integrity};

/// Hex SHA-256 of a byte slice
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Hex SHA-256 of a file, streamed
pub fn hash_file(path: &Path) -> Result<String> {
    let file =
        File::open(path).map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Verify artifact bytes against the descriptor's checksum
pub fn verify_artifact(bytes: &[u8], descriptor: &PackageDescriptor) -> Result<()> {
    check(descriptor, &sha256_hex(bytes))
}

/// Verify a file on disk against the descriptor's checksum
pub fn verify_file(path: &Path, descriptor: &PackageDescriptor) -> Result<()> {
    check(descriptor, &hash_file(path)?)
}

fn check(descriptor: &PackageDescriptor, actual: &str) -> Result<()> {
    if digests_match(&descriptor.checksum, actual) {
        debug!(identifier = %descriptor.identifier, "checksum verified");
        Ok(())
    } else {
        Err(integrity::mismatch(
            &descriptor.identifier,
            descriptor.checksum.to_ascii_lowercase(),
            actual,
        ))
    }
}

/// Case-insensitive digest comparison over the full decoded length
pub fn digests_match(expected: &str, actual: &str) -> bool {
    let (Ok(expected), Ok(actual)) = (hex::decode(expected), hex::decode(actual)) else {
        return false;
    };
    if expected.len() != actual.len() || expected.is_empty() {
        return false;
    }

    expected
        .iter()
        .zip(&actual)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaskError;
    use crate::test_fixtures::plezy_at;
    use tempfile::TempDir;

    const ARTIFACT: &[u8] = b"not really a disk image";

    #[test]
    fn test_sha256_hex_known_value() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_verify_artifact_success() {
        let descriptor = plezy_at("1.14.1", &sha256_hex(ARTIFACT));
        assert!(verify_artifact(ARTIFACT, &descriptor).is_ok());
    }

    #[test]
    fn test_verify_artifact_case_insensitive() {
        let descriptor = plezy_at("1.14.1", &sha256_hex(ARTIFACT).to_uppercase());
        assert!(verify_artifact(ARTIFACT, &descriptor).is_ok());
    }

    #[test]
    fn test_verify_artifact_mismatch() {
        let descriptor = plezy_at("1.14.1", &sha256_hex(b"other bytes"));
        let err = verify_artifact(ARTIFACT, &descriptor).unwrap_err();
        assert!(matches!(err, CaskError::IntegrityError { .. }));
    }

    #[test]
    fn test_verify_artifact_any_bit_flip_fails() {
        let descriptor = plezy_at("1.14.1", &sha256_hex(ARTIFACT));
        for byte in 0..ARTIFACT.len() {
            for bit in 0..8 {
                let mut mutated = ARTIFACT.to_vec();
                mutated[byte] ^= 1 << bit;
                assert!(
                    verify_artifact(&mutated, &descriptor).is_err(),
                    "flip of bit {bit} in byte {byte} was accepted"
                );
            }
        }
    }

    #[test]
    fn test_digests_match_rejects_prefix() {
        let full = sha256_hex(ARTIFACT);
        assert!(digests_match(&full, &full));
        assert!(!digests_match(&full[..32], &full));
        assert!(!digests_match(&full, &full[..32]));
        assert!(!digests_match("", ""));
        assert!(!digests_match("zz", "zz"));
    }

    #[test]
    fn test_verify_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plezy-macos.dmg");
        std::fs::write(&path, ARTIFACT).unwrap();

        assert_eq!(hash_file(&path).unwrap(), sha256_hex(ARTIFACT));

        let good = plezy_at("1.14.1", &sha256_hex(ARTIFACT));
        assert!(verify_file(&path, &good).is_ok());

        let bad = plezy_at("1.14.1", &sha256_hex(b"x"));
        assert!(verify_file(&path, &bad).is_err());
    }

    #[test]
    fn test_verify_file_missing() {
        let descriptor = plezy_at("1.14.1", &sha256_hex(ARTIFACT));
        let err = verify_file(Path::new("/nonexistent/plezy.dmg"), &descriptor).unwrap_err();
        assert!(matches!(err, CaskError::FileReadFailed { .. }));
    }
}
