use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use quill_core::Validated;
use serde::{Deserialize, Serialize};
use tower::ServiceExt;

#[derive(Deserialize, Serialize, garde::Validate)]
struct Note {
    #[garde(length(min = 1))]
    title: String,
    #[garde(skip)]
    #[serde(default)]
    pinned: bool,
}

async fn echo(Validated(note): Validated<Note>) -> Json<Note> {
    Json(note)
}

fn app() -> Router {
    Router::new().route("/notes", post(echo))
}

async fn send(body: &str, content_type: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("POST").uri("/notes");
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let resp = app()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn valid_body_reaches_handler() {
    let (status, body) = send(r#"{"title":"hello"}"#, Some("application/json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "hello");
    assert_eq!(body["pinned"], false);
}

#[tokio::test]
async fn rule_violation_is_field_level_400() {
    let (status, body) = send(r#"{"title":""}"#, Some("application/json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "title");
    assert_eq!(body["details"][0]["code"], "validation");
}

#[tokio::test]
async fn type_mismatch_is_400() {
    let (status, body) = send(r#"{"title":5}"#, Some("application/json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "body");
    assert_eq!(body["details"][0]["code"], "parse");
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (status, _) = send("{not json", Some("application/json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_content_type_is_400() {
    let (status, body) = send(r#"{"title":"hello"}"#, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "body");
}
