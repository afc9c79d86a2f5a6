//! In-process test harness for the HTTP API.
//!
//! Builds the real router over in-memory stores and drives it with
//! `tower::ServiceExt::oneshot`, so no sockets or database are involved.
//! Run with logs: RUST_LOG=debug cargo test -- --nocapture

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use server_core::kernel::TestDependencies;
use server_core::server::build_app;
use std::time::Duration;
use tower::ServiceExt;

pub struct TestHarness {
    router: Router,
}

impl TestHarness {
    /// Harness backed by the mock result source.
    pub fn new() -> Self {
        Self::with_deps(TestDependencies::new())
    }

    pub fn with_deps(deps: TestDependencies) -> Self {
        Self::with_request_timeout(deps, Duration::from_secs(30))
    }

    pub fn with_request_timeout(deps: TestDependencies, request_timeout: Duration) -> Self {
        // Respect RUST_LOG; try_init so multiple harnesses don't panic.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            router: build_app(deps.into_server_deps(), vec![], request_timeout),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Body::empty()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Body::from(body.to_string()))
            .await
    }

    /// POST a raw body with a JSON content type, for malformed payloads.
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Body::from(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Body::empty()).await
    }

    async fn send(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }
}
