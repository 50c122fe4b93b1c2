//! Password hashing and verification
//!
//! Argon2id with a random per-password salt.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Check that a password is long enough and mixes upper case, lower case, and digits
///
/// # Errors
/// Returns `AppError::Validation` naming the first unmet requirement
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at most {MAX_PASSWORD_LENGTH} characters long"
        )));
    }

    let checks: [(fn(&char) -> bool, &str); 3] = [
        (char::is_ascii_uppercase, "an uppercase letter"),
        (char::is_ascii_lowercase, "a lowercase letter"),
        (char::is_ascii_digit, "a digit"),
    ];
    for (check, what) in checks {
        if !password.chars().any(|c| check(&c)) {
            return Err(AppError::validation(format!(
                "Password must contain at least {what}"
            )));
        }
    }

    Ok(())
}
