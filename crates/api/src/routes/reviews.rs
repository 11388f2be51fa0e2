//! Route definitions for the `/reviews` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// Mutations address the row through the request body.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// PUT    /           -> update
/// DELETE /           -> delete
/// PATCH  /           -> move_position
/// POST   /renumber   -> renumber
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reviews::list)
                .post(reviews::create)
                .put(reviews::update)
                .delete(reviews::delete)
                .patch(reviews::move_position),
        )
        .route("/renumber", post(reviews::renumber))
}
