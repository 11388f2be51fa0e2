//! Handlers for the `/classes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contentdesk_core::types::DbId;
use contentdesk_db::models::class::{Class, ClassInput};
use contentdesk_db::repositories::{position, ClassRepo};
use serde::Deserialize;

use super::{active_flag, present, present_id, require_image, DeleteRequest, MoveRequest};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{MessageResponse, RenumberResponse};
use crate::state::AppState;

const MISSING_FIELDS: &str = "All class fields are required";

/// Request body for create (`id` absent) and update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPayload {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    /// `0`/`1` or a boolean.
    pub is_active: Option<serde_json::Value>,
}

impl ClassPayload {
    fn into_input(self) -> AppResult<(Option<DbId>, ClassInput)> {
        let missing = || AppError::BadRequest(MISSING_FIELDS.into());
        let name = present(self.name).ok_or_else(missing)?;
        let description = present(self.description).ok_or_else(missing)?;
        let url = present(self.url).ok_or_else(missing)?;
        let image = present(self.image).ok_or_else(missing)?;
        let is_active = self.is_active.as_ref().ok_or_else(missing)?;

        require_image(&image)?;

        let input = ClassInput {
            name,
            description,
            url,
            image,
            is_active: active_flag(is_active)?,
        };
        Ok((present_id(self.id), input))
    }
}

/// GET /api/classes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Class>>> {
    let classes = ClassRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Failed to fetch classes"))?;
    Ok(Json(classes))
}

/// POST /api/classes
pub async fn create(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ClassPayload>,
) -> AppResult<(StatusCode, Json<Class>)> {
    let (_, input) = payload.into_input()?;

    let class = ClassRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::op("Failed to create class"))?;

    tracing::info!(
        class_id = class.id,
        image_len = class.image.len(),
        user_id = user.user_id,
        "Class created",
    );
    Ok((StatusCode::CREATED, Json(class)))
}

/// PUT /api/classes
pub async fn update(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ClassPayload>,
) -> AppResult<Json<Class>> {
    let (id, input) = payload.into_input()?;
    let id = id.ok_or_else(|| AppError::BadRequest(MISSING_FIELDS.into()))?;

    let class = ClassRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::op("Failed to update class"))?;

    tracing::info!(class_id = id, user_id = user.user_id, "Class updated");
    Ok(Json(class))
}

/// DELETE /api/classes
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DeleteRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = payload.require_id()?;

    ClassRepo::delete(&state.pool, id, state.config.gap_policy)
        .await
        .map_err(AppError::op("Failed to delete class"))?;

    tracing::info!(class_id = id, user_id = user.user_id, "Class deleted");
    Ok(Json(MessageResponse::new("Class deleted")))
}

/// PATCH /api/classes
pub async fn move_position(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MoveRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (id, direction) = payload.require()?;

    let outcome = ClassRepo::move_position(&state.pool, id, direction)
        .await
        .map_err(AppError::op("Failed to move class"))?;

    tracing::info!(
        class_id = id,
        %direction,
        noop = outcome.is_noop(),
        user_id = user.user_id,
        "Class moved",
    );
    Ok(Json(MessageResponse::new(format!("Class moved {direction}"))))
}

/// POST /api/classes/renumber
pub async fn renumber(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<RenumberResponse>> {
    let changed = position::renumber::<ClassRepo>(&state.pool)
        .await
        .map_err(AppError::op("Failed to renumber classes"))?;

    tracing::info!(changed, user_id = user.user_id, "Class positions renumbered");
    Ok(Json(RenumberResponse {
        message: "Class positions renumbered".into(),
        changed,
    }))
}
