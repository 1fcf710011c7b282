// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content fingerprints for saved assets.

use cropcam_core::error::{CropcamError, Result};
use sha2::{Digest, Sha256};

/// SHA-256 of `data` as a lowercase hex string. Used as the asset id.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Check that `data` hashes to `expected_hex`.
pub fn verify_hash(data: &[u8], expected_hex: &str) -> Result<()> {
    let actual = hash_bytes(data);
    if actual == expected_hex {
        Ok(())
    } else {
        Err(CropcamError::MediaLibrary(format!(
            "content mismatch: expected {expected_hex}, got {actual}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn hash_empty_input() {
        assert_eq!(hash_bytes(b""), EMPTY_SHA256);
    }

    #[test]
    fn verify_detects_mismatch() {
        let hex = hash_bytes(b"photo");
        assert!(verify_hash(b"photo", &hex).is_ok());
        assert!(matches!(
            verify_hash(b"other", &hex),
            Err(CropcamError::MediaLibrary(_))
        ));
    }
}
