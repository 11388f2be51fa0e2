//! Handlers for the `/reviews` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contentdesk_core::types::DbId;
use contentdesk_core::validation::{MAX_RATING, MIN_RATING};
use contentdesk_db::models::review::{Review, ReviewInput};
use contentdesk_db::repositories::{position, ReviewRepo};
use serde::Deserialize;

use super::{json_integer, present, present_id, DeleteRequest, MoveRequest};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{MessageResponse, RenumberResponse};
use crate::state::AppState;

const INVALID_REVIEW: &str =
    "All fields are required, and rating must be an integer between 1 and 5";

/// Request body for create (`id` absent) and update.
///
/// `rating` is kept as raw JSON so a fractional or string rating gets the
/// same 400 message as an out-of-range one.
#[derive(Debug, Deserialize)]
pub struct ReviewPayload {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub review: Option<String>,
    pub rating: Option<serde_json::Value>,
    pub date: Option<String>,
}

impl ReviewPayload {
    fn into_input(self) -> Option<(Option<DbId>, ReviewInput)> {
        let rating = self
            .rating
            .as_ref()
            .and_then(json_integer)
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))?;
        let input = ReviewInput {
            name: present(self.name)?,
            review: present(self.review)?,
            rating,
            date: present(self.date)?,
        };
        Some((present_id(self.id), input))
    }
}

/// GET /api/reviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Failed to fetch reviews"))?;
    Ok(Json(reviews))
}

/// POST /api/reviews
pub async fn create(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ReviewPayload>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let (_, input) = payload
        .into_input()
        .ok_or_else(|| AppError::BadRequest(INVALID_REVIEW.into()))?;

    let review = ReviewRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::op("Failed to create review"))?;

    tracing::info!(
        review_id = review.id,
        rating = review.rating,
        user_id = user.user_id,
        "Review created",
    );
    Ok((StatusCode::CREATED, Json(review)))
}

/// PUT /api/reviews
pub async fn update(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ReviewPayload>,
) -> AppResult<Json<Review>> {
    let Some((Some(id), input)) = payload.into_input() else {
        return Err(AppError::BadRequest(INVALID_REVIEW.into()));
    };

    let review = ReviewRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::op("Failed to update review"))?;

    tracing::info!(review_id = id, user_id = user.user_id, "Review updated");
    Ok(Json(review))
}

/// DELETE /api/reviews
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DeleteRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = payload.require_id()?;

    ReviewRepo::delete(&state.pool, id, state.config.gap_policy)
        .await
        .map_err(AppError::op("Failed to delete review"))?;

    tracing::info!(review_id = id, user_id = user.user_id, "Review deleted");
    Ok(Json(MessageResponse::new("Review deleted")))
}

/// PATCH /api/reviews
pub async fn move_position(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MoveRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (id, direction) = payload.require()?;

    let outcome = ReviewRepo::move_position(&state.pool, id, direction)
        .await
        .map_err(AppError::op("Failed to move review"))?;

    tracing::info!(
        review_id = id,
        %direction,
        noop = outcome.is_noop(),
        user_id = user.user_id,
        "Review moved",
    );
    Ok(Json(MessageResponse::new(format!("Review moved {direction}"))))
}

/// POST /api/reviews/renumber
pub async fn renumber(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<RenumberResponse>> {
    let changed = position::renumber::<ReviewRepo>(&state.pool)
        .await
        .map_err(AppError::op("Failed to renumber reviews"))?;

    tracing::info!(changed, user_id = user.user_id, "Review positions renumbered");
    Ok(Json(RenumberResponse {
        message: "Review positions renumbered".into(),
        changed,
    }))
}
