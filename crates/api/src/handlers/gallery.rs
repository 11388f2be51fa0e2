//! Handlers for the `/gallery` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contentdesk_core::types::DbId;
use contentdesk_db::models::gallery_image::{GalleryImage, GalleryImageInput};
use contentdesk_db::repositories::{position, GalleryImageRepo};
use serde::Deserialize;

use super::{present, present_id, require_image, DeleteRequest, MoveRequest};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{MessageResponse, RenumberResponse};
use crate::state::AppState;

/// Request body for create (`id` absent) and update.
#[derive(Debug, Deserialize)]
pub struct GalleryImagePayload {
    pub id: Option<DbId>,
    /// Base64 data URI.
    pub image: Option<String>,
    pub filename: Option<String>,
}

/// GET /api/gallery
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryImage>>> {
    let images = GalleryImageRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Failed to fetch gallery images"))?;
    Ok(Json(images))
}

/// POST /api/gallery
pub async fn create(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GalleryImagePayload>,
) -> AppResult<(StatusCode, Json<GalleryImage>)> {
    let (Some(image), Some(filename)) = (present(payload.image), present(payload.filename))
    else {
        return Err(AppError::BadRequest(
            "Image and filename are required".into(),
        ));
    };
    require_image(&image)?;

    let created = GalleryImageRepo::create(&state.pool, &GalleryImageInput { image, filename })
        .await
        .map_err(AppError::op("Failed to create gallery image"))?;

    tracing::info!(
        image_id = created.id,
        filename = %created.filename,
        image_len = created.image.len(),
        user_id = user.user_id,
        "Gallery image created",
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/gallery
pub async fn update(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GalleryImagePayload>,
) -> AppResult<Json<GalleryImage>> {
    let (Some(id), Some(image), Some(filename)) = (
        present_id(payload.id),
        present(payload.image),
        present(payload.filename),
    ) else {
        return Err(AppError::BadRequest(
            "ID, image, and filename are required".into(),
        ));
    };
    require_image(&image)?;

    let updated = GalleryImageRepo::update(&state.pool, id, &GalleryImageInput { image, filename })
        .await
        .map_err(AppError::op("Failed to update gallery image"))?;

    tracing::info!(image_id = id, user_id = user.user_id, "Gallery image updated");
    Ok(Json(updated))
}

/// DELETE /api/gallery
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DeleteRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = payload.require_id()?;

    GalleryImageRepo::delete(&state.pool, id, state.config.gap_policy)
        .await
        .map_err(AppError::op("Failed to delete gallery image"))?;

    tracing::info!(image_id = id, user_id = user.user_id, "Gallery image deleted");
    Ok(Json(MessageResponse::new("Gallery image deleted")))
}

/// PATCH /api/gallery
pub async fn move_position(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MoveRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (id, direction) = payload.require()?;

    let outcome = GalleryImageRepo::move_position(&state.pool, id, direction)
        .await
        .map_err(AppError::op("Failed to move image"))?;

    tracing::info!(
        image_id = id,
        %direction,
        noop = outcome.is_noop(),
        user_id = user.user_id,
        "Gallery image moved",
    );
    Ok(Json(MessageResponse::new(format!("Image moved {direction}"))))
}

/// POST /api/gallery/renumber
pub async fn renumber(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<RenumberResponse>> {
    let changed = position::renumber::<GalleryImageRepo>(&state.pool)
        .await
        .map_err(AppError::op("Failed to renumber gallery images"))?;

    tracing::info!(changed, user_id = user.user_id, "Gallery positions renumbered");
    Ok(Json(RenumberResponse {
        message: "Gallery image positions renumbered".into(),
        changed,
    }))
}
