//! Shared helpers for integration tests.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use triage_ai::config::ServerConfig;
use triage_ai::server;
use triage_ai::triage::{Classifier, TriageConfig};

/// Symptom texts paired with the expected (level, score).
pub mod scenarios {
    pub const HIGH: &[&str] = &[
        "I have chest pain and nausea",
        "Shortness of breath when climbing stairs",
        "severe bleeding from the wound",
        "brief LOSS OF CONSCIOUSNESS this morning",
        "STROKE symptoms",
        "sudden one-sided weakness in the arm",
    ];

    pub const MEDIUM: &[&str] = &[
        "I have a persistent cough",
        "Fever of 39C",
        "dizziness when standing",
        "vomiting since last night",
        "possible ear infection",
    ];

    pub const LOW: &[&str] = &[
        "mild headache, otherwise fine",
        "",
        "sore knee after running",
        "cough",
    ];
}

/// Router with the built-in configuration.
pub fn default_app() -> Router {
    let classifier = Classifier::new(&TriageConfig::default()).expect("default classifier");
    server::router(Arc::new(classifier), &ServerConfig::default())
}

/// Send a request to the router and decode the JSON body, if any.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Option<serde_json::Value>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = app.oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, serde_json::from_slice(&bytes).ok())
}

/// POST a JSON body to `/predict`.
pub async fn predict(app: Router, body: &str) -> (StatusCode, Option<serde_json::Value>) {
    send(app, Method::POST, "/predict", Some("application/json"), body).await
}
