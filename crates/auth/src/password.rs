//! Password hashing and verification.

use mesto_core::{DomainError, DomainResult};

/// bcrypt cost factor for stored hashes.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a per-hash random salt.
pub fn hash(plain: &str) -> DomainResult<String> {
    bcrypt::hash(plain, HASH_COST)
        .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))
}

/// Check a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a mismatch; callers collapse both into
/// the same credentials failure.
pub fn verify(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_not_the_plaintext_and_verifies() {
        let hashed = hash("correct horse battery staple").unwrap();

        assert_ne!(hashed, "correct horse battery staple");
        assert!(verify("correct horse battery staple", &hashed));
        assert!(!verify("wrong password", &hashed));
    }

    #[test]
    fn same_password_hashes_to_different_strings() {
        let a = hash("secret").unwrap();
        let b = hash("secret").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_is_a_mismatch() {
        assert!(!verify("secret", "not-a-bcrypt-hash"));
    }
}
