//! Handlers for the `/faqs` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contentdesk_core::types::DbId;
use contentdesk_db::models::faq::{Faq, FaqInput};
use contentdesk_db::repositories::{position, FaqRepo};
use serde::Deserialize;

use super::{present, present_id, DeleteRequest, MoveRequest};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{MessageResponse, RenumberResponse};
use crate::state::AppState;

/// Request body for create (`id` absent) and update.
#[derive(Debug, Deserialize)]
pub struct FaqPayload {
    pub id: Option<DbId>,
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// GET /api/faqs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let faqs = FaqRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Failed to fetch faqs"))?;
    Ok(Json(faqs))
}

/// POST /api/faqs
///
/// Appends the FAQ at the end of the list.
pub async fn create(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<FaqPayload>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    let (Some(question), Some(answer)) = (present(payload.question), present(payload.answer))
    else {
        return Err(AppError::BadRequest(
            "Question and answer are required".into(),
        ));
    };

    let faq = FaqRepo::create(&state.pool, &FaqInput { question, answer })
        .await
        .map_err(AppError::op("Failed to create faq"))?;

    tracing::info!(
        faq_id = faq.id,
        position = faq.position,
        user_id = user.user_id,
        "FAQ created",
    );
    Ok((StatusCode::CREATED, Json(faq)))
}

/// PUT /api/faqs
pub async fn update(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<FaqPayload>,
) -> AppResult<Json<Faq>> {
    let (Some(id), Some(question), Some(answer)) = (
        present_id(payload.id),
        present(payload.question),
        present(payload.answer),
    ) else {
        return Err(AppError::BadRequest(
            "ID, question, and answer are required".into(),
        ));
    };

    let faq = FaqRepo::update(&state.pool, id, &FaqInput { question, answer })
        .await
        .map_err(AppError::op("Failed to update faq"))?;

    tracing::info!(faq_id = id, user_id = user.user_id, "FAQ updated");
    Ok(Json(faq))
}

/// DELETE /api/faqs
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DeleteRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = payload.require_id()?;

    FaqRepo::delete(&state.pool, id, state.config.gap_policy)
        .await
        .map_err(AppError::op("Failed to delete faq"))?;

    tracing::info!(faq_id = id, user_id = user.user_id, "FAQ deleted");
    Ok(Json(MessageResponse::new("Faq deleted")))
}

/// PATCH /api/faqs
///
/// Moves the FAQ one step up or down. Moving past either end succeeds
/// without changing anything.
pub async fn move_position(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MoveRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (id, direction) = payload.require()?;

    let outcome = FaqRepo::move_position(&state.pool, id, direction)
        .await
        .map_err(AppError::op("Failed to move FAQ"))?;

    tracing::info!(
        faq_id = id,
        %direction,
        noop = outcome.is_noop(),
        user_id = user.user_id,
        "FAQ moved",
    );
    Ok(Json(MessageResponse::new(format!("FAQ moved {direction}"))))
}

/// POST /api/faqs/renumber
pub async fn renumber(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<RenumberResponse>> {
    let changed = position::renumber::<FaqRepo>(&state.pool)
        .await
        .map_err(AppError::op("Failed to renumber faqs"))?;

    tracing::info!(changed, user_id = user.user_id, "FAQ positions renumbered");
    Ok(Json(RenumberResponse {
        message: "Faq positions renumbered".into(),
        changed,
    }))
}
