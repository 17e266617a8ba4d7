//! Password hashing with Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::UserError;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// Hashes a password with Argon2id and a random per-password salt.
///
/// Returns a PHC-formatted hash string safe for storage.
///
/// # Errors
///
/// Returns `UserError::WeakPassword` when the password is shorter than
/// eight characters, or an infrastructure error when hashing fails.
pub fn hash_password(password: &str) -> Result<String, UserError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(UserError::weak_password(
            "Password must be at least 8 characters",
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| UserError::infrastructure(format!("Password hashing failed: {}", e)))?
        .to_string();

    Ok(hash)
}

/// Verifies a password against a stored PHC-formatted hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, UserError> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| UserError::infrastructure(format!("Invalid password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(UserError::infrastructure(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
