#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use quill_core::QuillConfig;
use quill_data::{ArticleRepository, MemoryStore};
use quill_server::{app, AppState};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

/// In-process client dispatching requests with `oneshot`.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// App backed by the four sample articles.
    pub fn seeded() -> Self {
        Self::with_repository(Arc::new(MemoryStore::seeded()))
    }

    /// App backed by an empty store.
    pub fn empty() -> Self {
        Self::with_repository(Arc::new(MemoryStore::new()))
    }

    pub fn with_repository(articles: Arc<dyn ArticleRepository>) -> Self {
        let users = Arc::new(MemoryStore::new());
        Self::new(app(AppState::new(articles, users, QuillConfig::empty())))
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &impl Serialize) -> TestResponse {
        self.send(Method::POST, path, Some(json_body(body))).await
    }

    pub async fn put(&self, path: &str, body: &impl Serialize) -> TestResponse {
        self.send(Method::PUT, path, Some(json_body(body))).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(Method::DELETE, path, None).await
    }

    /// Send a raw body with an explicit content type.
    pub async fn post_raw(&self, path: &str, body: &str, content_type: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.dispatch(request).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        let body = match body {
            Some(bytes) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        self.dispatch(builder.body(body).unwrap()).await
    }

    pub async fn dispatch(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

fn json_body(body: &impl Serialize) -> Vec<u8> {
    serde_json::to_vec(body).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "expected {expected}, got {} with body {}",
            self.status,
            self.text()
        );
        self
    }

    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    pub fn assert_created(self) -> Self {
        self.assert_status(StatusCode::CREATED)
    }

    pub fn assert_bad_request(self) -> Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
