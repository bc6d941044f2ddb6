//! Password hashing and verification.
//!
//! Wraps bcrypt, which embeds a fresh random salt and the cost factor into
//! every hash it produces: hashing the same plaintext twice yields two
//! different encodings, and verification re-derives with the stored salt and
//! cost before a constant-time digest comparison.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Lowest acceptable bcrypt cost factor. Costs below this are clamped up.
pub const MIN_HASH_COST: u32 = 10;

/// Cost factor used by [`hash_password`].
pub const HASH_COST: u32 = DEFAULT_COST;

/// Hashes a plaintext password with the default cost factor.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, HASH_COST)
}

/// Hashes a plaintext password with an explicit cost factor.
///
/// The cost is clamped to [`MIN_HASH_COST`] so a misconfigured caller can
/// never weaken stored hashes below the documented floor.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    let cost = cost.max(MIN_HASH_COST);

    hash(password, cost).map_err(AppError::internal)
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on a mismatch; `Err` only when the stored hash is
/// not a valid bcrypt encoding.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash).map_err(AppError::internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password_with_cost("secret1", MIN_HASH_COST).unwrap();

        assert_ne!(hash, "secret1");
        assert!(verify_password("secret1", &hash).unwrap());
        assert!(!verify_password("secret2", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hash1 = hash_password_with_cost("secret1", MIN_HASH_COST).unwrap();
        let hash2 = hash_password_with_cost("secret1", MIN_HASH_COST).unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password("secret1", &hash1).unwrap());
        assert!(verify_password("secret1", &hash2).unwrap());
    }

    #[test]
    fn test_cost_is_clamped_to_minimum() {
        let hash = hash_password_with_cost("secret1", 4).unwrap();

        // bcrypt encodes the cost after the version marker: $2b$10$...
        assert!(hash.contains(&format!("${MIN_HASH_COST}$")));
        assert!(verify_password("secret1", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("secret1", "not-a-bcrypt-hash").is_err());
    }
}
