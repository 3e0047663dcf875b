use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing with Argon2id.
///
/// Stored hashes are PHC strings carrying algorithm, parameters, and a
/// per-password random salt, so `verify` needs nothing besides the stored
/// value. Verification inside the `argon2` crate is constant-time.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored PHC hash.
    ///
    /// A non-matching password is `Ok(false)`; an error means the stored
    /// value is not a parseable hash.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "p1";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$argon2"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn same_password_hashes_differently() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("p1").expect("Failed to hash password");
        let second = hasher.hash("p1").expect("Failed to hash password");

        // Random salts: equal inputs must not produce equal hashes.
        assert_ne!(first, second);
    }

    #[test]
    fn verify_rejects_invalid_stored_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("p1", "not_a_phc_string");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
