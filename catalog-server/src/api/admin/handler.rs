//! Admin authentication handlers
//!
//! Single-credential dashboard login issuing a JWT session token.

use std::time::Duration;

use axum::{Json, extract::State};

use crate::auth;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::client::{LoginRequest, LoginResponse};

/// Fixed delay for authentication to blunt timing probes
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/admin/login
///
/// Checks the configured credential and returns a bearer token for the
/// dashboard. The error message is the same for a wrong username and a
/// wrong password.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // Fixed delay before any result is revealed
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let username_ok = req.username == state.config.admin_username;
    let password_ok = auth::verify_password(&req.password, &state.admin_password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !username_ok || !password_ok {
        tracing::warn!(username = %req.username, "Admin login failed");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&req.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(username = %req.username, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        username: req.username,
    }))
}
