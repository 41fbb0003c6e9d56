//! Shared helpers for HTTP integration tests.
//!
//! Every test gets its own migrated in-memory SQLite database and drives
//! the real router with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use articles_api::api::{create_router, AppState};
use articles_api::domain::{Author, CreateAuthor, CreateRegion, Region};
use articles_api::infra::Database;

/// Router plus direct service access for arranging test data.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let database = Database::in_memory()
            .await
            .expect("in-memory database should migrate");
        let state = AppState::from_database(Arc::new(database));

        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        self.send(request).await
    }

    /// Send a JSON-typed request whose body is taken verbatim.
    pub async fn request_raw(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn author(&self, first_name: &str, last_name: &str) -> Author {
        self.state
            .author_service
            .create_author(CreateAuthor {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
            .await
            .expect("author should be created")
    }

    pub async fn region(&self, code: &str, name: &str) -> Region {
        self.state
            .region_service
            .create_region(CreateRegion {
                code: code.to_string(),
                name: name.to_string(),
            })
            .await
            .expect("region should be created")
    }

    /// Create an article through the API and return its id.
    pub async fn article(&self, body: Value) -> i64 {
        let (status, json) = self.post("/articles", body).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", json);
        json["id"].as_i64().expect("article id")
    }
}
