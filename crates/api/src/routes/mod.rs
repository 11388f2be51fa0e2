pub mod auth;
pub mod banners;
pub mod classes;
pub mod faqs;
pub mod gallery;
pub mod health;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
/// /auth/session               current token identity (requires auth)
///
/// /faqs                       list (public); create, update, delete, move (admin)
/// /faqs/renumber              repair positions (admin)
/// /reviews                    same shape as /faqs
/// /reviews/renumber
/// /classes                    same shape as /faqs
/// /classes/renumber
/// /gallery                    same shape as /faqs
/// /gallery/renumber
/// /banners                    list (public); create, update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/faqs", faqs::router())
        .nest("/reviews", reviews::router())
        .nest("/classes", classes::router())
        .nest("/gallery", gallery::router())
        .nest("/banners", banners::router())
}
