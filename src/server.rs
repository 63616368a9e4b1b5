//! HTTP front end: `POST /predict`.

use crate::config::ServerConfig;
use crate::error::Result;
use crate::triage::{Classifier, TriageRequest, TriageResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

/// Request that never reached the classifier.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = self.status.as_u16(), error = %self.message, "Rejected request");
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Build the router around a shared classifier.
pub fn router(classifier: Arc<Classifier>, config: &ServerConfig) -> Router {
    let app = Router::new()
        .route("/predict", post(predict))
        .with_state(classifier);

    let app = if config.permissive_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };
    app.layer(TraceLayer::new_for_http())
}

async fn predict(
    State(classifier): State<Arc<Classifier>>,
    payload: std::result::Result<Json<TriageRequest>, JsonRejection>,
) -> std::result::Result<Json<TriageResult>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(classifier.classify(&request)))
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, classifier: Arc<Classifier>) -> Result<()> {
    let listener = TcpListener::bind(config.socket_addr()?).await?;
    serve_on(listener, config, classifier, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(
    listener: TcpListener,
    config: &ServerConfig,
    classifier: Arc<Classifier>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "triage-ai listening");

    axum::serve(listener, router(classifier, config))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("triage-ai stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
