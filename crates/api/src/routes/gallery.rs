//! Route definitions for the `/gallery` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
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
            get(gallery::list)
                .post(gallery::create)
                .put(gallery::update)
                .delete(gallery::delete)
                .patch(gallery::move_position),
        )
        .route("/renumber", post(gallery::renumber))
}
