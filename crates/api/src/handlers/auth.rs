//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use contentdesk_core::error::CoreError;
use contentdesk_core::roles::ROLE_ADMIN;
use contentdesk_core::types::DbId;
use contentdesk_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::access::LOCAL_ADMIN_EMAIL;
use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}

/// Identity of the bearer of the current token.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub user_id: DbId,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Verify the configured operator credentials and issue an access token.
/// The operator is recorded in `users` on first sign-in.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let valid = state
        .access
        .verify_credentials(&input.username, &input.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !valid {
        tracing::warn!(username = %input.username, "Rejected login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let user = UserRepo::find_or_create(&state.pool, LOCAL_ADMIN_EMAIL, Some(&input.username))
        .await
        .map_err(AppError::op("Failed to record operator"))?;

    let access_token = generate_access_token(user.id, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "Operator signed in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserInfo {
            id: user.id,
            email: user.email,
            name: user.name,
            role: ROLE_ADMIN.to_string(),
        },
    }))
}

/// GET /api/auth/session
///
/// Echo the identity carried by the bearer token.
pub async fn session(user: AuthUser) -> Json<SessionInfo> {
    Json(SessionInfo {
        user_id: user.user_id,
        role: user.role,
    })
}
