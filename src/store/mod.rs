// Bastion — Store Module
//
// Durable account storage backed by SQLite. Owns the users table, the
// unique-username constraint, and password hash verification. Plaintext
// passwords never leave this module unhashed.

mod db;
mod error;
mod models;
mod password;
mod repository;

pub use db::Database;
pub use error::StoreError;
pub use models::{Account, VerificationResult};
pub use repository::{AccountStore, SqliteAccountStore};
