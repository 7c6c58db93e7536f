//! Credential schemes.
//!
//! The user directory never looks at a stored credential directly; it asks a
//! [`CredentialCheck`] to seal a password at registration and to verify a
//! login attempt. Swapping the scheme does not touch any caller.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors raised while sealing a password.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The hashing backend failed.
    #[error("failed to hash password")]
    Hash,
}

/// Turns passwords into stored credentials and checks attempts against them.
pub trait CredentialCheck: Send + Sync + std::fmt::Debug {
    /// Short scheme name used in logs.
    fn scheme(&self) -> &'static str;

    /// Produces the value to store for `password`.
    fn seal(&self, password: &str) -> Result<String, CredentialError>;

    /// Returns true if `password` matches the stored credential.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Stores and compares raw passwords.
///
/// Insecure by construction. Kept for parity with the seed user flow; use
/// [`Argon2Credentials`] for anything real.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentials;

impl CredentialCheck for PlaintextCredentials {
    fn scheme(&self) -> &'static str {
        "plaintext"
    }

    fn seal(&self, password: &str) -> Result<String, CredentialError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        password == stored
    }
}

/// Stores Argon2id PHC strings with a random salt per password.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Credentials;

impl CredentialCheck for Argon2Credentials {
    fn scheme(&self) -> &'static str {
        "argon2"
    }

    fn seal(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| CredentialError::Hash)
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_round_trip() {
        let scheme = PlaintextCredentials;
        let stored = scheme.seal("password1").unwrap();
        assert_eq!(stored, "password1");
        assert!(scheme.verify("password1", &stored));
        assert!(!scheme.verify("Password1", &stored));
    }

    #[test]
    fn test_argon2_does_not_store_raw_password() {
        let scheme = Argon2Credentials;
        let stored = scheme.seal("password1").unwrap();
        assert_ne!(stored, "password1");
        assert!(stored.starts_with("$argon2"));
        assert!(scheme.verify("password1", &stored));
        assert!(!scheme.verify("password2", &stored));
    }

    #[test]
    fn test_argon2_salts_each_password() {
        let scheme = Argon2Credentials;
        let a = scheme.seal("same").unwrap();
        let b = scheme.seal("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_argon2_rejects_malformed_hash() {
        assert!(!Argon2Credentials.verify("anything", "not-a-phc-string"));
    }
}
