// Bastion — Account data models
//
// SECURITY: The `password_hash` field is intentionally private. It is never
// included in Debug output, log messages, or serialized responses. Only the
// repository in this module reads it, during credential verification.

use std::fmt;

/// A persisted account record. The hash is private — the store verifies
/// passwords against it internally and never hands it out.
pub struct Account {
    pub id: i64,
    pub username: String,
    password_hash: String,
}

impl Account {
    pub(crate) fn new(id: i64, username: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            password_hash,
        }
    }

    pub(crate) fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Custom Debug implementation that NEVER reveals the stored hash.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.username)
    }
}

/// Outcome of a login attempt. A tagged result rather than a boolean, so
/// the three failure causes stay distinguishable at the HTTP boundary.
#[derive(Debug)]
pub enum VerificationResult {
    /// Account exists and the password matched its hash.
    Verified(Account),
    /// Account exists but the password did not match.
    PasswordMismatch,
    /// No account with that username.
    AccountNotFound,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
