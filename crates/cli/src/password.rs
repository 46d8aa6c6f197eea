//! Password hashing with Argon2id.
//!
//! Only the resulting PHC-format hash string is ever persisted; there is no
//! code path that stores or logs the plaintext.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors that can occur while hashing or verifying a password.
#[derive(Debug, Error)]
pub enum HashError {
    /// The hashing step itself failed.
    #[error("password hashing failed")]
    Hash,
    /// A stored hash could not be parsed as a PHC string.
    #[error("stored password hash is malformed")]
    MalformedHash,
}

/// Hash a password using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns `HashError::Hash` if the hasher cannot process the input.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| HashError::Hash)
}

/// Verify a password against a stored hash.
///
/// Returns `Ok(false)` on a mismatch; an `Err` means the stored hash itself
/// is unusable.
///
/// # Errors
///
/// Returns `HashError::MalformedHash` if `hash` is not a valid PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, HashError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| HashError::MalformedHash)?;
    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_against_input() {
        let hash = hash_password("dev123").unwrap();
        assert!(verify_password("dev123", &hash).unwrap());
    }

    #[test]
    fn test_hash_rejects_wrong_password() {
        let hash = hash_password("dev123").unwrap();
        assert!(!verify_password("newpass", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_phc_format_and_salted() {
        let first = hash_password("dev123").unwrap();
        let second = hash_password("dev123").unwrap();

        assert!(first.starts_with("$argon2"));
        // Fresh salt per invocation: same input, different hashes.
        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_does_not_contain_plaintext() {
        let hash = hash_password("super-secret-password").unwrap();
        assert!(!hash.contains("super-secret-password"));
    }

    #[test]
    fn test_malformed_hash_is_an_error_not_a_mismatch() {
        assert!(matches!(
            verify_password("dev123", "not-a-phc-string"),
            Err(HashError::MalformedHash)
        ));
    }
}
