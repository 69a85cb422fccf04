//! Password hashing, verification and strength policy
//!
//! Uses Argon2id for password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Passwords rejected outright regardless of length
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "password123",
    "12345678",
    "123456789",
    "1234567890",
    "qwerty123",
    "qwertyuiop",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "welcome1",
    "letmein1",
    "trustno1",
    "abc12345",
    "admin123",
    "passw0rd",
    "superman",
    "starwars",
    "whatever",
    "11111111",
    "00000000",
];

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Validate password strength.
///
/// A password must be 8 to 128 characters, not entirely numeric, not a
/// well-known common password, and must not contain the username
/// (case-insensitive).
///
/// # Errors
/// Returns a validation error describing the first failed rule
pub fn validate_password_strength(password: &str, username: &str) -> Result<(), AppError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "This password is too short. It must contain at least {MIN_PASSWORD_LENGTH} characters."
        )));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "This password is too long. It must contain at most {MAX_PASSWORD_LENGTH} characters."
        )));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "This password is entirely numeric.".to_string(),
        ));
    }

    let lowered = password.to_lowercase();

    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return Err(AppError::Validation(
            "This password is too common.".to_string(),
        ));
    }

    let username = username.trim().to_lowercase();
    if !username.is_empty() && lowered.contains(&username) {
        return Err(AppError::Validation(
            "The password is too similar to the username.".to_string(),
        ));
    }

    Ok(())
}
