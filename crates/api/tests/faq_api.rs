//! Integration tests for the `/api/faqs` resource, including the
//! reordering protocol as seen over HTTP.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, build_test_app_with, delete_json, get, list_ids,
    patch_json, post_json, put_json, test_config,
};
use contentdesk_core::ordering::GapPolicy;
use serde_json::json;
use sqlx::SqlitePool;

async fn create_faq(app: axum::Router, question: &str) -> i64 {
    let response = post_json(
        app,
        "/api/faqs",
        json!({ "question": question, "answer": format!("About {question}") }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = false)]
async fn create_returns_201_with_row(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    let response = post_json(
        app.clone(),
        "/api/faqs",
        json!({ "question": "Opening hours?", "answer": "<p>9 to 5</p>" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["question"], "Opening hours?");
    assert_eq!(json["position"], 0);
    assert_eq!(json["isHtml"], true);
    assert!(json["id"].as_i64().unwrap() > 0);
}

#[sqlx::test(migrations = false)]
async fn create_missing_answer_returns_400(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    let response = post_json(app.clone(), "/api/faqs", json!({ "question": "Q" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Question and answer are required");

    let empty = post_json(app, "/api/faqs", json!({ "question": "", "answer": "A" })).await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = false)]
async fn list_is_ordered_and_stable(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let a = create_faq(app.clone(), "A").await;
    let b = create_faq(app.clone(), "B").await;
    let c = create_faq(app.clone(), "C").await;

    let first = body_bytes(get(app.clone(), "/api/faqs").await).await;
    let second = body_bytes(get(app.clone(), "/api/faqs").await).await;

    assert_eq!(first, second);
    assert_eq!(list_ids(app, "/api/faqs").await, vec![a, b, c]);
}

#[sqlx::test(migrations = false)]
async fn move_scenario_over_http(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let a = create_faq(app.clone(), "A").await;
    let b = create_faq(app.clone(), "B").await;
    let c = create_faq(app.clone(), "C").await;

    let response = patch_json(
        app.clone(),
        "/api/faqs",
        json!({ "id": c, "direction": "up" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "FAQ moved up");
    assert_eq!(list_ids(app.clone(), "/api/faqs").await, vec![a, c, b]);

    // Moving the head up is a successful no-op.
    let response = patch_json(
        app.clone(),
        "/api/faqs",
        json!({ "id": a, "direction": "up" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = body_json(get(app, "/api/faqs").await).await;
    let positions: Vec<(i64, i64)> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["id"].as_i64().unwrap(), r["position"].as_i64().unwrap()))
        .collect();
    assert_eq!(positions, vec![(a, 0), (c, 1), (b, 2)]);
}

#[sqlx::test(migrations = false)]
async fn move_requires_valid_direction(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let a = create_faq(app.clone(), "A").await;

    let missing = patch_json(app.clone(), "/api/faqs", json!({ "id": a })).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(missing).await["error"],
        "ID and direction are required"
    );

    let sideways = patch_json(
        app,
        "/api/faqs",
        json!({ "id": a, "direction": "sideways" }),
    )
    .await;
    assert_eq!(sideways.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(sideways).await["error"],
        "Direction must be \"up\" or \"down\""
    );
}

#[sqlx::test(migrations = false)]
async fn update_changes_content_only(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    create_faq(app.clone(), "A").await;
    let b = create_faq(app.clone(), "B").await;

    let response = put_json(
        app.clone(),
        "/api/faqs",
        json!({ "id": b, "question": "B2", "answer": "plain" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["question"], "B2");
    assert_eq!(json["position"], 1);
    assert_eq!(json["isHtml"], false);

    let missing_id = put_json(app, "/api/faqs", json!({ "question": "Q", "answer": "A" })).await;
    assert_eq!(missing_id.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(missing_id).await["error"],
        "ID, question, and answer are required"
    );
}

#[sqlx::test(migrations = false)]
async fn delete_nonexistent_returns_500_with_details(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    let response = delete_json(app, "/api/faqs", json!({ "id": 999 })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to delete faq");
    assert!(json["details"]
        .as_str()
        .unwrap()
        .contains("No FAQ found with ID"));
}

#[sqlx::test(migrations = false)]
async fn delete_without_id_returns_400(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    let response = delete_json(app, "/api/faqs", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "ID is required");
}

#[sqlx::test(migrations = false)]
async fn delete_keeps_gap_by_default(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let a = create_faq(app.clone(), "A").await;
    let b = create_faq(app.clone(), "B").await;
    let c = create_faq(app.clone(), "C").await;

    let response = delete_json(app.clone(), "/api/faqs", json!({ "id": b })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Faq deleted");

    let rows = body_json(get(app, "/api/faqs").await).await;
    assert_eq!(rows[0]["id"].as_i64().unwrap(), a);
    assert_eq!(rows[1]["id"].as_i64().unwrap(), c);
    assert_eq!(rows[1]["position"], 2);
}

#[sqlx::test(migrations = false)]
async fn delete_compacts_when_configured(pool: SqlitePool) {
    let mut config = test_config();
    config.gap_policy = GapPolicy::Compact;
    let app = build_test_app_with(pool, config).await;
    create_faq(app.clone(), "A").await;
    let b = create_faq(app.clone(), "B").await;
    create_faq(app.clone(), "C").await;

    delete_json(app.clone(), "/api/faqs", json!({ "id": b })).await;
    let next = create_faq(app.clone(), "D").await;

    let rows = body_json(get(app, "/api/faqs").await).await;
    let positions: Vec<i64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["position"].as_i64().unwrap())
        .collect();
    assert_eq!(positions, vec![0, 1, 2]);
    assert_eq!(rows[2]["id"].as_i64().unwrap(), next);
}

#[sqlx::test(migrations = false)]
async fn renumber_closes_gaps(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    let a = create_faq(app.clone(), "A").await;
    create_faq(app.clone(), "B").await;
    delete_json(app.clone(), "/api/faqs", json!({ "id": a })).await;

    let response = post_json(app.clone(), "/api/faqs/renumber", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["changed"], 1);
    let rows = body_json(get(app, "/api/faqs").await).await;
    assert_eq!(rows[0]["position"], 0);
}
