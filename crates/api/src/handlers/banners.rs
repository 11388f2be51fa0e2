//! Handlers for the `/banners` resource.
//!
//! Banners are listed in creation order and cannot be reordered.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contentdesk_core::types::DbId;
use contentdesk_db::models::banner::{Banner, BannerInput};
use contentdesk_db::repositories::BannerRepo;
use serde::Deserialize;

use super::{present, present_id, require_image, DeleteRequest};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for create (`id` absent) and update.
#[derive(Debug, Deserialize)]
pub struct BannerPayload {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub message: Option<String>,
    /// Optional base64 data URI. Absent or empty clears the gif.
    pub gif: Option<String>,
}

impl BannerPayload {
    /// Text fields present and gif, when given, a data URI.
    fn into_input(self, missing: &str) -> AppResult<(Option<DbId>, BannerInput)> {
        let (Some(title), Some(subtitle), Some(message)) = (
            present(self.title),
            present(self.subtitle),
            present(self.message),
        ) else {
            return Err(AppError::BadRequest(missing.to_string()));
        };
        let gif = present(self.gif);
        if let Some(gif) = &gif {
            require_image(gif)?;
        }
        let input = BannerInput {
            title,
            subtitle,
            message,
            gif,
        };
        Ok((present_id(self.id), input))
    }
}

/// GET /api/banners
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Banner>>> {
    let banners = BannerRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Failed to fetch banners"))?;
    Ok(Json(banners))
}

/// POST /api/banners
pub async fn create(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BannerPayload>,
) -> AppResult<(StatusCode, Json<Banner>)> {
    let (_, input) = payload.into_input("Title, subtitle, and message are required")?;

    let banner = BannerRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::op("Failed to create banner"))?;

    tracing::info!(
        banner_id = banner.id,
        has_gif = banner.gif.is_some(),
        user_id = user.user_id,
        "Banner created",
    );
    Ok((StatusCode::CREATED, Json(banner)))
}

/// PUT /api/banners
pub async fn update(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BannerPayload>,
) -> AppResult<Json<Banner>> {
    const MISSING: &str = "ID, title, subtitle, and message are required";
    let (id, input) = payload.into_input(MISSING)?;
    let id = id.ok_or_else(|| AppError::BadRequest(MISSING.into()))?;

    let banner = BannerRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::op("Failed to update banner"))?;

    tracing::info!(banner_id = id, user_id = user.user_id, "Banner updated");
    Ok(Json(banner))
}

/// DELETE /api/banners
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DeleteRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = payload.require_id()?;

    BannerRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::op("Failed to delete banner"))?;

    tracing::info!(banner_id = id, user_id = user.user_id, "Banner deleted");
    Ok(Json(MessageResponse::new("Banner deleted")))
}
