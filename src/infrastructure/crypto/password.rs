//! Password hashing utilities

use bcrypt::{hash, verify};

/// bcrypt cost used when none is configured (~tens of ms per hash)
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Hash a password using bcrypt with the given cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hashed = hash_password(password, TEST_COST).unwrap();

        assert_ne!(hashed, password);
        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same", TEST_COST).unwrap();
        let b = hash_password("same", TEST_COST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn out_of_range_cost_is_an_error() {
        assert!(hash_password("pw", 2).is_err());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-bcrypt-hash").is_err());
    }
}
