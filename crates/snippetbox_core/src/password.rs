//! Argon2id password hashing with fixed cost parameters.

use crate::constants::{
    ARGON2_MEMORY_KIB, ARGON2_PARALLELISM, ARGON2_TIME_COST, MAX_PASSWORD_BYTES,
};
use crate::error::AppError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

/// Hashes and verifies passwords.
///
/// Holds a precomputed hash of a throwaway password so callers can spend the
/// same verification cost when no stored hash exists.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Build a hasher with the crate's fixed Argon2id parameters.
    ///
    /// # Errors
    /// Returns [`AppError::PasswordHashing`] if the parameters are rejected or
    /// the dummy hash cannot be produced.
    pub fn new() -> Result<Self, AppError> {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_TIME_COST,
            ARGON2_PARALLELISM,
            None,
        )
        .map_err(|err| AppError::PasswordHashing(err.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let dummy_hash = encode(&argon2, b"snippetbox-timing-equalizer")?;
        Ok(Self { argon2, dummy_hash })
    }

    /// Derive a salted hash for `password`.
    ///
    /// # Returns
    /// The PHC-encoded hash as bytes, ready for the `hashed_password` column.
    ///
    /// # Errors
    /// Returns [`AppError::PasswordHashing`] when the password exceeds
    /// [`MAX_PASSWORD_BYTES`] or argon2 rejects the input.
    pub fn hash(&self, password: &str) -> Result<Vec<u8>, AppError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::PasswordHashing(format!(
                "password exceeds {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }
        encode(&self.argon2, password.as_bytes()).map(String::into_bytes)
    }

    /// Check `password` against a stored hash.
    ///
    /// # Returns
    /// `Ok(true)` on match, `Ok(false)` on mismatch.
    ///
    /// # Errors
    /// Returns [`AppError::PasswordHashing`] when the stored hash is not a
    /// valid PHC string.
    pub fn verify(&self, password: &str, stored_hash: &[u8]) -> Result<bool, AppError> {
        let encoded = std::str::from_utf8(stored_hash)
            .map_err(|err| AppError::PasswordHashing(format!("stored hash is not UTF-8: {}", err)))?;
        let parsed =
            PasswordHash::new(encoded).map_err(|err| AppError::PasswordHashing(err.to_string()))?;
        // Verification uses the parameters embedded in the stored hash.
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(AppError::PasswordHashing(err.to_string())),
        }
    }

    /// Burn one verification against the dummy hash; the result is ignored.
    pub fn verify_dummy(&self, password: &str) {
        let _ = self.verify(password, self.dummy_hash.as_bytes());
    }
}

fn encode(argon2: &Argon2<'static>, password: &[u8]) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password, &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::PasswordHashing(err.to_string()))
}
