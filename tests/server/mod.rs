//! `POST /predict` through the router and over a real socket.

use crate::common::{default_app, predict, send};
use axum::http::{Method, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use triage_ai::config::ServerConfig;
use triage_ai::server::serve_on;
use triage_ai::triage::{Classifier, TriageConfig};

#[tokio::test]
async fn predict_scenarios() {
    let cases = [
        (
            json!({"text": "I have chest pain and nausea"}),
            json!({"risk_level": "HIGH", "risk_score": 0.85, "rationale": "Red-flag indicators detected.", "model_version": "v0.1"}),
        ),
        (
            json!({"text": "I have a persistent cough"}),
            json!({"risk_level": "MEDIUM", "risk_score": 0.55, "rationale": "Moderate risk indicators present.", "model_version": "v0.1"}),
        ),
        (
            json!({"text": "mild headache, otherwise fine"}),
            json!({"risk_level": "LOW", "risk_score": 0.2, "rationale": "No red-flag indicators detected.", "model_version": "v0.1"}),
        ),
        (
            json!({"text": ""}),
            json!({"risk_level": "LOW", "risk_score": 0.2, "rationale": "No red-flag indicators detected.", "model_version": "v0.1"}),
        ),
        (
            json!({"text": "STROKE symptoms", "age": 70, "sex": "F"}),
            json!({"risk_level": "HIGH", "risk_score": 0.85, "rationale": "Red-flag indicators detected.", "model_version": "v0.1"}),
        ),
    ];

    for (request, expected) in cases {
        let (status, body) = predict(default_app(), &request.to_string()).await;
        assert_eq!(status, StatusCode::OK, "status for {request}");
        assert_eq!(body, Some(expected), "body for {request}");
    }
}

#[tokio::test]
async fn optional_fields_may_be_missing_or_null() {
    for body in [
        r#"{}"#,
        r#"{"text": null, "age": null, "sex": null}"#,
        r#"{"text": "fine", "sex": "unspecified"}"#,
    ] {
        let (status, json) = predict(default_app(), body).await;
        assert_eq!(status, StatusCode::OK, "status for {body}");
        assert_eq!(json.unwrap()["risk_level"], "LOW");
    }
}

#[tokio::test]
async fn wrong_field_types_are_unprocessable() {
    for body in [
        r#"{"text": 42}"#,
        r#"{"text": "fever", "age": "seventy"}"#,
        r#"{"text": "fever", "sex": 1}"#,
    ] {
        let (status, json) = predict(default_app(), body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "status for {body}");
        assert!(json.unwrap()["error"].is_string());
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, json) = predict(default_app(), r#"{"text": "fever""#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.unwrap()["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_is_unsupported() {
    let (status, json) = send(
        default_app(),
        Method::POST,
        "/predict",
        None,
        r#"{"text": "fever"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(json.unwrap()["error"].is_string());
}

#[tokio::test]
async fn only_post_predict_is_routed() {
    let (status, _) = send(default_app(), Method::GET, "/predict", None, "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(
        default_app(),
        Method::POST,
        "/api/predictions",
        Some("application/json"),
        "{}",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn serves_over_tcp_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let classifier = Arc::new(Classifier::new(&TriageConfig::default()).unwrap());
    let (tx, rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        serve_on(listener, &ServerConfig::default(), classifier, async move {
            let _ = rx.await;
        })
        .await
    });

    let body = r#"{"text": "sudden dizziness"}"#;
    let request = format!(
        "POST /predict HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK"), "unexpected response: {raw}");
    assert!(raw.contains(r#""risk_level":"MEDIUM""#));

    tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
