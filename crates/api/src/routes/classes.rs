//! Route definitions for the `/classes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::classes;
use crate::state::AppState;

/// Routes mounted at `/classes`.
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
            get(classes::list)
                .post(classes::create)
                .put(classes::update)
                .delete(classes::delete)
                .patch(classes::move_position),
        )
        .route("/renumber", post(classes::renumber))
}
