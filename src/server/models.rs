// Bastion — HTTP request/response bodies
//
// SECURITY: `AuthRequest` carries a plaintext password, so it gets a
// redacting Debug impl instead of the derive. Response bodies never
// contain the password or its hash.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of both `POST /api/register` and `POST /api/login`.
/// Absent fields deserialize to the empty string and fail validation.
#[derive(Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful registration: the new account's id, never its hash.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Plain confirmation body for successful logins.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body: a human-readable message, plus the underlying cause
/// string for persistence failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
