//! HTTP surface: the visualizer page and the JSON search endpoint.
//!
//! | Route               | Response                                   |
//! |---------------------|--------------------------------------------|
//! | `GET /`             | visualizer page                            |
//! | `GET /static/script.js` | page script                            |
//! | `POST /search`      | `SearchReportV1`, or 400 `{"error": ...}`  |
//! | `GET /healthz`      | `{"status": "ok"}`                         |

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bisect_search::error::NormalizeError;
use bisect_search::policy::NormalizePolicyV1;
use bisect_search::render::TracingObserver;
use bisect_search::report::{run_request, run_request_observed, SearchReportV1, SearchRequestV1};
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;

const INDEX_HTML: &str = include_str!("../static/index.html");
const SCRIPT_JS: &str = include_str!("../static/script.js");

/// Message shown to clients for every rejected request.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Ensure array and target are numeric.";

/// Shared, read-only handler state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub policy: NormalizePolicyV1,
    pub trace_steps: bool,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            policy: config.normalize_policy(),
            trace_steps: config.trace_steps,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unreadable request body: {0}")]
    BadBody(String),

    #[error(transparent)]
    Invalid(#[from] NormalizeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(reason = %self, "search rejected");
        let body = json!({
            "error": INVALID_INPUT_MESSAGE,
            "detail": self.to_string(),
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadBody(rejection.body_text())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/search", post(search))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

async fn search(
    State(state): State<AppState>,
    body: Result<Json<SearchRequestV1>, JsonRejection>,
) -> Result<Json<SearchReportV1>, ApiError> {
    let Json(request) = body?;
    let len = request.array.as_ref().map_or(0, Vec::len);

    let report = if state.trace_steps {
        run_request_observed(&request, &state.policy, &mut TracingObserver)?
    } else {
        run_request(&request, &state.policy)?
    };

    tracing::info!(
        len,
        sorted = report.sorted,
        steps = report.steps.len(),
        found = report.is_found(),
        result = ?report.result,
        "search completed"
    );
    Ok(Json(report))
}

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for ctrl-c");
    }
}
