/**
 * Password Hashing
 *
 * Thin wrappers over bcrypt so the hashing cost comes from configuration
 * instead of being fixed at call sites.
 */

use bcrypt::{hash, verify, BcryptError};

/// Hash a plaintext password with the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost)
}

/// Check a plaintext password against a stored bcrypt hash
///
/// Comparison is constant-time inside bcrypt.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    verify(password, password_hash)
}
