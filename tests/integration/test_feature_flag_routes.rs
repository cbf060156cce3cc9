//! Feature flag route tests

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use feature_flag_api::routes::{AppState, create_app};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

fn create_test_server() -> TestServer {
    TestServer::new(create_app(AppState::in_memory(), CorsLayer::permissive())).unwrap()
}

async fn create_flag(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/v1/feature-flags").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

fn sample_flag(name: &str, environment: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{name} flag"),
        "environment": environment,
        "owner": "platform-team"
    })
}

fn last_modified(flag: &Value) -> DateTime<Utc> {
    flag["lastModified"].as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_create_feature_flag_defaults_to_disabled() {
    let server = create_test_server();

    let flag = create_flag(&server, sample_flag("checkout", "dev")).await;

    assert_eq!(flag["name"], "checkout");
    assert_eq!(flag["environment"], "dev");
    assert_eq!(flag["owner"], "platform-team");
    assert_eq!(flag["enabled"], false);
    assert!(flag.get("lastModified").is_some());
    assert!(flag.get("rolloutPercentage").is_none());
    assert!(flag.get("dependencies").is_none());
    assert!(flag.get("expiresAt").is_none());
}

#[tokio::test]
async fn test_create_feature_flag_with_optional_fields() {
    let server = create_test_server();
    let mut body = sample_flag("checkout", "dev");
    body["enabled"] = json!(true);
    body["rolloutPercentage"] = json!(25);
    body["dependencies"] = json!(["new-dashboard"]);
    body["expiresAt"] = json!("2030-01-31");

    let flag = create_flag(&server, body).await;

    assert_eq!(flag["enabled"], true);
    assert_eq!(flag["rolloutPercentage"], 25.0);
    assert_eq!(flag["dependencies"], json!(["new-dashboard"]));
    let expires_at: DateTime<Utc> = flag["expiresAt"].as_str().unwrap().parse().unwrap();
    assert_eq!(expires_at.to_rfc3339(), "2030-01-31T00:00:00+00:00");
}

#[tokio::test]
async fn test_toggle_then_update_advances_last_modified() {
    let server = create_test_server();
    let flag = create_flag(&server, sample_flag("checkout", "dev")).await;
    let id = flag["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/v1/feature-flags/{id}/toggle"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let toggled: Value = response.json();
    assert_eq!(toggled["enabled"], true);
    assert!(last_modified(&toggled) > last_modified(&flag));

    let response = server
        .put(&format!("/api/v1/feature-flags/{id}"))
        .json(&json!({ "rolloutPercentage": 50 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["enabled"], true);
    assert_eq!(updated["rolloutPercentage"], 50.0);
    assert_eq!(updated["name"], "checkout");
    assert!(last_modified(&updated) > last_modified(&toggled));
}

#[tokio::test]
async fn test_toggle_accepts_post() {
    let server = create_test_server();
    let flag = create_flag(&server, sample_flag("checkout", "dev")).await;
    let id = flag["id"].as_str().unwrap();

    let first: Value = server
        .post(&format!("/api/v1/feature-flags/{id}/toggle"))
        .await
        .json();
    let second: Value = server
        .post(&format!("/api/v1/feature-flags/{id}/toggle"))
        .await
        .json();

    assert_eq!(first["enabled"], true);
    assert_eq!(second["enabled"], false);
}

#[tokio::test]
async fn test_invalid_rollout_leaves_flag_unchanged() {
    let server = create_test_server();
    let flag = create_flag(&server, sample_flag("checkout", "dev")).await;
    let id = flag["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/v1/feature-flags/{id}"))
        .json(&json!({ "rolloutPercentage": 150, "name": "renamed" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["errors"],
        json!(["rolloutPercentage must be between 0 and 100"])
    );

    let current: Value = server
        .get(&format!("/api/v1/feature-flags/{id}"))
        .await
        .json();
    assert_eq!(current, flag);
}

#[tokio::test]
async fn test_create_feature_flag_validation() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/feature-flags")
        .json(&json!({
            "name": "checkout",
            "description": "",
            "rolloutPercentage": -1,
            "expiresAt": "next tuesday"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let errors: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert_eq!(
        errors,
        vec![
            "environment is required",
            "owner is required",
            "rolloutPercentage must be between 0 and 100",
            "expiresAt is not a valid date: next tuesday",
        ]
    );

    let flags: Value = server.get("/api/v1/feature-flags").await.json();
    assert!(flags.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_filters_by_environment() {
    let server = create_test_server();
    create_flag(&server, sample_flag("a", "dev")).await;
    create_flag(&server, sample_flag("b", "prod")).await;
    create_flag(&server, sample_flag("c", "dev")).await;

    let all: Value = server.get("/api/v1/feature-flags").await.json();
    assert_eq!(all.as_array().unwrap().len(), 3);

    let dev: Value = server
        .get("/api/v1/feature-flags")
        .add_query_param("environment", "dev")
        .await
        .json();
    let names: Vec<&str> = dev
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "c"]);

    let upper: Value = server
        .get("/api/v1/feature-flags")
        .add_query_param("environment", "DEV")
        .await
        .json();
    assert!(upper.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_null_clears_optional_fields() {
    let server = create_test_server();
    let mut body = sample_flag("checkout", "dev");
    body["rolloutPercentage"] = json!(10);
    body["dependencies"] = json!(["a"]);
    body["expiresAt"] = json!("2030-01-01T12:00:00Z");
    let flag = create_flag(&server, body).await;
    let id = flag["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/v1/feature-flags/{id}"))
        .json(&json!({ "rolloutPercentage": null, "expiresAt": null }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert!(updated.get("rolloutPercentage").is_none());
    assert!(updated.get("expiresAt").is_none());
    assert_eq!(updated["dependencies"], json!(["a"]));
}

#[tokio::test]
async fn test_delete_feature_flag() {
    let server = create_test_server();
    let flag = create_flag(&server, sample_flag("checkout", "dev")).await;
    let path = format!("/api/v1/feature-flags/{}", flag["id"].as_str().unwrap());

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get(&path).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_flag_is_not_found() {
    let server = create_test_server();

    let response = server.patch("/api/v1/feature-flags/nope/toggle").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .put("/api/v1/feature-flags/6f1c0f7e-3b7a-4f2e-9a55-0c6a4e8b9d10")
        .json(&json!({ "enabled": true }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_flags_survive_environment_deletion() {
    let server = create_test_server();
    let env: Value = server
        .post("/api/v1/environments")
        .json(&json!({ "name": "qa", "description": "QA" }))
        .await
        .json();
    let flag = create_flag(&server, sample_flag("checkout", "qa")).await;

    let response = server
        .delete(&format!("/api/v1/environments/{}", env["id"].as_str().unwrap()))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let current: Value = server
        .get(&format!("/api/v1/feature-flags/{}", flag["id"].as_str().unwrap()))
        .await
        .json();
    assert_eq!(current["environment"], "qa");
}

#[tokio::test]
async fn test_create_toggle_update_with_minimal_body() {
    let server = create_test_server();

    let flag = create_flag(
        &server,
        json!({ "name": "x", "environment": "dev", "enabled": false, "owner": "team" }),
    )
    .await;
    assert_eq!(flag["description"], "");
    assert_eq!(flag["enabled"], false);
    let id = flag["id"].as_str().unwrap();

    let toggled: Value = server
        .patch(&format!("/api/v1/feature-flags/{id}/toggle"))
        .await
        .json();
    assert_eq!(toggled["enabled"], true);
    assert!(last_modified(&toggled) > last_modified(&flag));

    let response = server
        .put(&format!("/api/v1/feature-flags/{id}"))
        .json(&json!({ "enabled": false }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["enabled"], false);
    assert_eq!(updated["owner"], "team");
    assert!(last_modified(&updated) > last_modified(&toggled));
}
