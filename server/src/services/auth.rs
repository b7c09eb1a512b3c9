//! Teacher account service — registration and credential checks.
//!
//! Passwords are stored as salted SHA-256 digests; the salt is a per-user
//! random hex string. Emails are normalized to lowercase before any lookup.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::bytes_to_hex;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Normalize an email address: trim, lowercase, require a single `@` with
/// non-empty sides.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub(crate) fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub(crate) fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Register a new teacher account.
///
/// # Errors
///
/// Returns `InvalidEmail`/`WeakPassword` for bad input, `EmailTaken` when the
/// email is already registered, or a database error.
pub async fn register_teacher(pool: &PgPool, name: &str, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }
    let name = name.trim();
    let name = if name.is_empty() { email.as_str() } else { name };

    let salt = generate_salt();
    let hash = hash_password(&salt, password);
    let id = Uuid::new_v4();

    let result = sqlx::query("INSERT INTO users (id, email, name, password_hash, password_salt) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(&email)
        .bind(name)
        .bind(&hash)
        .bind(&salt)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(id),
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => Err(AuthError::EmailTaken),
        Err(e) => Err(AuthError::Database(e)),
    }
}

/// Check a login attempt, returning the user id on success.
///
/// # Errors
///
/// Returns `InvalidCredentials` for an unknown email or wrong password,
/// `InvalidEmail` for unparseable input, or a database error.
pub async fn verify_credentials(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;

    let row = sqlx::query("SELECT id, password_hash, password_salt FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let stored_hash: String = row.get("password_hash");
    let salt: String = row.get("password_salt");
    if hash_password(&salt, password) != stored_hash {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
