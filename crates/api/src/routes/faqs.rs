//! Route definitions for the `/faqs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// Routes mounted at `/faqs`.
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
            get(faqs::list)
                .post(faqs::create)
                .put(faqs::update)
                .delete(faqs::delete)
                .patch(faqs::move_position),
        )
        .route("/renumber", post(faqs::renumber))
}
