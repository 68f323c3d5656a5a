// Bastion — Password hashing
//
// Argon2id with a random per-account salt. The slow, salted hash is what
// gets persisted; two accounts with the same password store different
// values, and leaked hashes stay expensive to brute-force.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use super::StoreError;

/// Hash a plaintext password with a freshly generated salt.
/// Returns the PHC-format string to persist.
pub(crate) fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Compare a plaintext password against a stored PHC-format hash.
/// A mismatch is `Ok(false)`; a malformed stored hash is an error.
pub(crate) fn verify_password(password: &str, stored_hash: &str) -> Result<bool, StoreError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| StoreError::Hash(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(StoreError::Hash(e.to_string())),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("s3cret").unwrap();
        assert!(
            verify_password("s3cret", &hash).unwrap(),
            "Correct password must verify against its own hash"
        );
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hash = hash_password("s3cret").unwrap();
        assert!(
            !verify_password("wrong", &hash).unwrap(),
            "Wrong password must not verify"
        );
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash_password("shared-password").unwrap();
        let second = hash_password("shared-password").unwrap();
        assert_ne!(
            first, second,
            "Salts are random per call, so identical passwords must hash differently"
        );

        // Both still verify against the common plaintext
        assert!(verify_password("shared-password", &first).unwrap());
        assert!(verify_password("shared-password", &second).unwrap());
    }

    #[test]
    fn test_hash_is_phc_format_not_plaintext() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"), "Hash must be PHC format");
        assert!(
            !hash.contains("hunter2"),
            "Stored value must never contain the plaintext"
        );
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(
            matches!(result, Err(StoreError::Hash(_))),
            "A corrupt stored hash is a hash error, not a mismatch"
        );
    }
}
