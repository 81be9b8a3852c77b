//! Password hashing capability: `hash(secret) -> digest`,
//! `verify(secret, digest) -> bool`. Digests are argon2id PHC strings,
//! salt included, so no separate salt column is needed.

use crate::{AuthError, Result};

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let digest = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::hash(e.to_string()))?;

    Ok(digest.to_string())
}

/// A mismatched password is `Ok(false)`; only a malformed digest is an error.
pub fn verify_password(password: &str, digest: &str) -> Result<bool> {
    let parsed = PasswordHash::new(digest).map_err(|e| AuthError::hash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
