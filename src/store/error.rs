// Bastion — Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with this username already exists. Raised from the
    /// UNIQUE constraint on insert, so concurrent registrations for the
    /// same name resolve to exactly one winner.
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Password hashing error: {0}")]
    Hash(String),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),
}
