//! Password hashing and verification (bcrypt).
//!
//! One-way adaptive hashing with a configurable cost factor. Verification
//! never fails hard: a malformed stored digest is treated as a mismatch.

use bcrypt::BcryptError;

/// Hash a plaintext password with the given bcrypt cost factor.
pub fn hash(plaintext: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, cost)
}

/// Verify a plaintext candidate against a stored digest.
///
/// Returns false on any mismatch, including a digest that cannot be parsed.
pub fn verify(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the test suite fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_roundtrip() {
        let digest = hash("secret1", TEST_COST).unwrap();
        assert!(verify("secret1", &digest));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let digest = hash("secret1", TEST_COST).unwrap();
        assert!(!verify("wrongpass", &digest));
    }

    #[test]
    fn malformed_digest_is_a_mismatch_not_an_error() {
        assert!(!verify("secret1", "not-a-bcrypt-digest"));
        assert!(!verify("secret1", ""));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash("secret1", TEST_COST).unwrap();
        let b = hash("secret1", TEST_COST).unwrap();
        assert_ne!(a, b);
        assert!(verify("secret1", &a));
        assert!(verify("secret1", &b));
    }

    #[test]
    fn digest_embeds_cost_factor() {
        let digest = hash("secret1", TEST_COST).unwrap();
        assert!(digest.starts_with("$2"));
        assert!(digest.contains("$04$"));
    }
}
