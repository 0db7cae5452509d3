mod common;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use click_counter::api::handlers::{add_clicks_handler, get_clicks_handler};
use click_counter::domain::reconciler::reconcile_pass;
use click_counter::state::AppState;
use serde_json::json;
use sqlx::PgPool;

fn clicks_app(state: AppState) -> Router {
    Router::new()
        .route("/api/clicks", get(get_clicks_handler).post(add_clicks_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_get_clicks_unknown_user_returns_404(pool: PgPool) {
    let server = TestServer::new(clicks_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/api/clicks").add_query_param("userID", 999).await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body, json!({ "message": "User not found" }));
}

#[sqlx::test]
async fn test_get_clicks_missing_user_id_is_a_client_error(pool: PgPool) {
    let server = TestServer::new(clicks_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/api/clicks").await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert!(body["message"].is_string());
}

#[sqlx::test]
async fn test_add_clicks_upserts_record(pool: PgPool) {
    let server = TestServer::new(clicks_app(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/api/clicks")
        .json(&json!({ "userID": 42, "clicks": 5 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["userID"], 42);
    assert_eq!(body["total"], 0);
    assert_eq!(body["pending"], 5);
    assert_eq!(body["lastReconciledPending"], 0);
}

#[sqlx::test]
async fn test_add_clicks_rejects_non_positive_clicks(pool: PgPool) {
    let server = TestServer::new(clicks_app(common::create_test_state(pool.clone()))).unwrap();

    for clicks in [0, -5] {
        let response = server
            .post("/api/clicks")
            .json(&json!({ "userID": 42, "clicks": clicks }))
            .await;

        response.assert_status_bad_request();
    }

    // The record was never created, let alone mutated
    assert!(common::fetch_record(&pool, 42).await.is_none());
}

#[sqlx::test]
async fn test_add_clicks_rejects_missing_clicks_field(pool: PgPool) {
    let server = TestServer::new(clicks_app(common::create_test_state(pool))).unwrap();

    let response = server.post("/api/clicks").json(&json!({ "userID": 42 })).await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert!(body["message"].is_string());
}

#[sqlx::test]
async fn test_add_clicks_rejects_malformed_body(pool: PgPool) {
    let server = TestServer::new(clicks_app(common::create_test_state(pool))).unwrap();

    let response = server
        .post("/api/clicks")
        .content_type("application/json")
        .text("not json")
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert!(body["message"].is_string());
}

#[sqlx::test]
async fn test_totals_become_visible_only_after_reconciliation(pool: PgPool) {
    let repository = common::create_repository(pool.clone());
    let server = TestServer::new(clicks_app(common::create_test_state(pool))).unwrap();

    // Add 5 then 3: acknowledged as pending, total untouched
    server
        .post("/api/clicks")
        .json(&json!({ "userID": 42, "clicks": 5 }))
        .await
        .assert_status_ok();
    server
        .post("/api/clicks")
        .json(&json!({ "userID": 42, "clicks": 3 }))
        .await
        .assert_status_ok();

    let response = server.get("/api/clicks").add_query_param("userID", 42).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 0);

    // Reconcile: both increments fold into the total
    reconcile_pass(repository.as_ref()).await;

    let response = server.get("/api/clicks").add_query_param("userID", 42).await;
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 8);

    // New increments stay pending until the next pass
    server
        .post("/api/clicks")
        .json(&json!({ "userID": 42, "clicks": 2 }))
        .await
        .assert_status_ok();

    let response = server.get("/api/clicks").add_query_param("userID", 42).await;
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 8);

    reconcile_pass(repository.as_ref()).await;

    let response = server.get("/api/clicks").add_query_param("userID", 42).await;
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 10);
}
