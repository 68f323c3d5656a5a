// Bastion — Account Store Repository
//
// Implements the two account operations: registration and credential
// verification. Key design decision: uniqueness is enforced by the UNIQUE
// constraint at insert time, not a pre-check, so two concurrent
// registrations of one username resolve to exactly one winner.

use std::sync::Arc;

use rusqlite::params;

use super::db::Database;
use super::models::{Account, VerificationResult};
use super::password;
use super::StoreError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over account storage operations.
pub trait AccountStore {
    /// Create a new account with a freshly salted password hash.
    /// Returns the persisted record with its assigned id.
    fn create_account(&self, username: &str, password: &str) -> Result<Account, StoreError>;

    /// Check a username/password pair against the stored hash.
    /// Read-only: no attempt counters, no lockout.
    fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerificationResult, StoreError>;
}

// ─── SQLite Implementation ──────────────────────────────────────────────────

pub struct SqliteAccountStore {
    db: Arc<Database>,
}

impl SqliteAccountStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Parse an account row from the database.
    fn row_to_account(row: &rusqlite::Row<'_>) -> rusqlite::Result<Account> {
        let id: i64 = row.get(0)?;
        let username: String = row.get(1)?;
        let password_hash: String = row.get(2)?;
        Ok(Account::new(id, username, password_hash))
    }

    /// Look up an account by exact username match.
    fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let conn = self.db.conn();
        let mut stmt =
            conn.prepare("SELECT id, username, password_hash FROM users WHERE username = ?1")?;

        let mut rows = stmt.query_map(params![username], Self::row_to_account)?;

        match rows.next() {
            Some(Ok(account)) => Ok(Some(account)),
            Some(Err(e)) => Err(StoreError::Database(e)),
            None => Ok(None),
        }
    }
}

impl AccountStore for SqliteAccountStore {
    fn create_account(&self, username: &str, password: &str) -> Result<Account, StoreError> {
        // The HTTP layer validates first; the store still refuses empties.
        if username.is_empty() {
            return Err(StoreError::EmptyField("username"));
        }
        if password.is_empty() {
            return Err(StoreError::EmptyField("password"));
        }

        // Hash before taking the connection lock — Argon2 is deliberately slow.
        let hash = password::hash_password(password)?;

        let id = {
            let conn = self.db.conn();
            conn.execute(
                "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
                params![username, hash],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    StoreError::DuplicateUsername(username.to_string())
                }
                other => StoreError::Database(other),
            })?;
            conn.last_insert_rowid()
        };

        tracing::info!(user_id = id, username = %username, "Account created");

        Ok(Account::new(id, username.to_string(), hash))
    }

    fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerificationResult, StoreError> {
        let account = match self.find_by_username(username)? {
            Some(account) => account,
            None => {
                tracing::debug!(username = %username, "Login attempt for unknown username");
                return Ok(VerificationResult::AccountNotFound);
            }
        };

        // Hash-aware comparison, never raw equality on the plaintext.
        if password::verify_password(password, account.password_hash())? {
            tracing::debug!(user_id = account.id, "Credentials verified");
            Ok(VerificationResult::Verified(account))
        } else {
            tracing::debug!(user_id = account.id, "Password mismatch");
            Ok(VerificationResult::PasswordMismatch)
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
