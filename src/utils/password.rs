//! Password hashing for back-office users.
//!
//! Hashes are PBKDF2-HMAC-SHA256 PHC strings
//! (`$pbkdf2-sha256$i=<rounds>,l=32$<salt>$<hash>`) with a 16-byte random salt.
//! The rounds are stored in the string, so old hashes keep verifying when the
//! default changes.

use pbkdf2::Pbkdf2;
use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::RngCore;
use serde_json::json;

use crate::error::AppError;

const SALT_LEN: usize = 16;

/// Hashes a plain password with a fresh random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the hasher rejects its input.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);

    let hashed = SaltString::encode_b64(&salt)
        .and_then(|salt| Pbkdf2.hash_password(password.as_bytes(), &salt).map(|h| h.to_string()));

    hashed.map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        AppError::internal("Password hashing failed", json!({}))
    })
}

/// Checks a plain password against a stored hash.
///
/// Returns `false` for malformed stored values.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };

    Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let stored = hash_password("s3cret-pass").unwrap();

        assert!(stored.starts_with("$pbkdf2-sha256$"));
        assert!(verify_password("s3cret-pass", &stored));
        assert!(!verify_password("wrong", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        assert_ne!(
            hash_password("same").unwrap(),
            hash_password("same").unwrap()
        );
    }

    #[test]
    fn test_tampered_hash_never_verifies() {
        let stored = hash_password("s3cret-pass").unwrap();
        let (head, digest) = stored.rsplit_once('$').unwrap();
        let flipped = if digest.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{head}${flipped}{}", &digest[1..]);

        assert!(!verify_password("s3cret-pass", &tampered));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("x", ""));
        assert!(!verify_password("x", "sha256$00$11"));
        assert!(!verify_password("x", "$pbkdf2-sha256$garbage"));
    }
}
