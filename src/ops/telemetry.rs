// * Telemetry - JSON Logging and Prometheus Metrics
// * Provides structured logging and metrics for production observability

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

lazy_static! {
    // * Extraction attempts by tier and outcome
    pub static ref EXTRACTIONS_TOTAL: CounterVec = register_counter_vec!(
        "postrake_extractions_total",
        "Extraction attempts by tier and outcome",
        &["tier", "outcome"]
    ).unwrap();

    // * Per-tier extraction latency
    pub static ref EXTRACT_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "postrake_extract_duration_seconds",
        "Extraction duration in seconds by tier",
        &["tier"],
        vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]
    ).unwrap();

    // * Media proxy requests by outcome
    pub static ref PROXY_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "postrake_proxy_requests_total",
        "Media proxy requests by outcome",
        &["outcome"]
    ).unwrap();
}

/// Initializes the tracing subscriber with JSON formatting
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .init();
}

/// Initializes tracing with pretty formatting (for development)
pub fn init_tracing_pretty() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().pretty())
        .init();
}

/// Renders the current metric registry in Prometheus text exposition format
pub fn render_metrics() -> String {
    let encoder = TextEncoder::new();
    let families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
