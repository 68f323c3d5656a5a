// Bastion — HTTP request handlers
//
// One function per endpoint. Handlers validate shape (non-empty fields),
// run the store call on the blocking pool since Argon2 hashing is slow,
// and translate outcomes to status codes. Each request is an independent
// transaction; a store failure here never takes the process down.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use zeroize::Zeroizing;

use crate::store::{AccountStore, VerificationResult};

use super::error::ApiError;
use super::models::{AuthRequest, MessageResponse, RegisterResponse};
use super::AppState;

/// `POST /api/register` — create an account, 201 with the new id.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let AuthRequest { username, password } = req;
    let account = tokio::task::spawn_blocking(move || {
        // Wipe the plaintext once the hash is computed
        let password = Zeroizing::new(password);
        state.store.create_account(&username, &password)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully.".to_string(),
            user_id: account.id,
        }),
    ))
}

/// `POST /api/login` — verify credentials, 200 on success.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let AuthRequest { username, password } = req;
    let outcome = tokio::task::spawn_blocking(move || {
        let password = Zeroizing::new(password);
        state.store.verify_credentials(&username, &password)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    match outcome {
        VerificationResult::Verified(account) => {
            tracing::info!(user_id = account.id, "Login successful");
            Ok(Json(MessageResponse {
                message: "Login successful.".to_string(),
            }))
        }
        VerificationResult::PasswordMismatch => Err(ApiError::WrongPassword),
        VerificationResult::AccountNotFound => Err(ApiError::UnknownUsername),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
