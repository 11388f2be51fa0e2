//! Route definitions for the `/banners` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::banners;
use crate::state::AppState;

/// Routes mounted at `/banners`.
///
/// ```text
/// GET    /   -> list
/// POST   /   -> create
/// PUT    /   -> update
/// DELETE /   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(banners::list)
            .post(banners::create)
            .put(banners::update)
            .delete(banners::delete),
    )
}
