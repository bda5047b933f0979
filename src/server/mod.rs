// * HTTP surface: extraction endpoint, media proxy, health, metrics.
// * Thin I/O wrappers over the pipeline; all extraction logic lives in engine.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use url::Url;

use crate::config::Settings;
use crate::engine::ExtractionPipeline;
use crate::model::ExtractRequest;
use crate::network::errors::ExtractError;
use crate::network::identity::IdentityProfile;
use crate::ops::telemetry::{render_metrics, PROXY_REQUESTS_TOTAL};

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<ExtractionPipeline>,
    proxy_client: reqwest::Client,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/api/extract", post(extract))
        .route("/api/proxy", get(proxy))
        .route("/api/health", get(health))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = ExtractionPipeline::new(&settings)?;

    let proxy_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(
            crate::config::constants::PROXY_TIMEOUT_SECS,
        ))
        .build()?;

    let state = AppState {
        pipeline: Arc::new(pipeline),
        proxy_client,
    };

    let app = create_router(state);
    let listener = TcpListener::bind(("0.0.0.0", settings.listen_port)).await?;
    info!(port = settings.listen_port, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

async fn extract(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid request data",
                    "details": rejection.body_text(),
                })),
            )
                .into_response();
        }
    };

    match state.pipeline.extract(&request).await {
        Ok(content) => (StatusCode::OK, Json(content)).into_response(),
        Err(e @ ExtractError::InvalidInput(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Extraction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to extract post content", "details": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProxyParams {
    url: String,
}

// * Streams a remote media asset back to the browser client. Origin servers
// * routinely refuse cross-origin fetches of post media; routing them through
// * here with a browser identity and a matching referer keeps previews and
// * downloads working.
async fn proxy(State(state): State<AppState>, Query(params): Query<ProxyParams>) -> Response {
    let upstream = match Url::parse(&params.url) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => u,
        _ => {
            PROXY_REQUESTS_TOTAL.with_label_values(&["rejected"]).inc();
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "url must be an absolute http(s) URL" })),
            )
                .into_response();
        }
    };

    let mut headers = reqwest::header::HeaderMap::new();
    IdentityProfile::random().apply_to_headers(&mut headers);
    headers.insert(
        "Referer",
        reqwest::header::HeaderValue::from_static("https://www.linkedin.com/"),
    );

    let resp = match state.proxy_client.get(upstream).headers(headers).send().await {
        Ok(resp) => resp,
        Err(e) => {
            PROXY_REQUESTS_TOTAL.with_label_values(&["error"]).inc();
            error!(error = %e, "Proxy upstream fetch failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = resp.status();
    if !status.is_success() {
        // * Mirror the origin's status with an empty body
        PROXY_REQUESTS_TOTAL
            .with_label_values(&["upstream_error"])
            .inc();
        return Response::builder()
            .status(StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY))
            .body(Body::empty())
            .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response());
    }

    PROXY_REQUESTS_TOTAL.with_label_values(&["success"]).inc();

    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(content_type) = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(length) = resp.content_length() {
        builder = builder.header(header::CONTENT_LENGTH, length);
    }

    builder
        .body(Body::from_stream(resp.bytes_stream()))
        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
}

async fn health() -> Response {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
    .into_response()
}

async fn metrics() -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        render_metrics(),
    )
        .into_response()
}
