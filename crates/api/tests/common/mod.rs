#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use contentdesk_core::ordering::GapPolicy;
use contentdesk_core::roles::ROLE_ADMIN;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use contentdesk_api::auth::access::AdminAccess;
use contentdesk_api::auth::jwt::{generate_access_token, JwtConfig};
use contentdesk_api::config::{AdminConfig, ServerConfig};
use contentdesk_api::router::build_app_router;
use contentdesk_api::state::AppState;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        gap_policy: GapPolicy::Keep,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        admin: AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            emails: vec!["owner@example.com".to_string()],
        },
    }
}

/// Build the full application router against `pool`, creating the schema
/// first.
pub async fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, test_config()).await
}

pub async fn build_test_app_with(pool: SqlitePool, config: ServerConfig) -> Router {
    contentdesk_db::bootstrap(&pool).await.unwrap();

    let access = AdminAccess::from_config(&config.admin).unwrap();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        access: Arc::new(access),
    };
    build_app_router(state, &config)
}

/// A valid admin bearer token for the test config.
pub fn admin_token() -> String {
    generate_access_token(1, ROLE_ADMIN, &test_config().jwt).unwrap()
}

/// A valid token carrying a non-admin role.
pub fn viewer_token() -> String {
    generate_access_token(2, "viewer", &test_config().jwt).unwrap()
}

/// Read the full body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON body, optionally with a bearer token.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a raw (possibly malformed) body as admin.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {}", admin_token()))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body, Some(&admin_token())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body, Some(&admin_token())).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body, Some(&admin_token())).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::DELETE, uri, body, Some(&admin_token())).await
}

/// Ids of the array returned by `GET uri`, in response order.
pub async fn list_ids(app: Router, uri: &str) -> Vec<i64> {
    let json = body_json(get(app, uri).await).await;
    json.as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}
