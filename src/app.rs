//! Served application facade.
//!
//! [`application`] is the single fixed entry point the dispatcher hands
//! control to, standing in for the search application library. The
//! application reads its configuration location exclusively from the
//! `CONFIG` environment variable when the router is built; the
//! configuration schema itself is owned by the search engine, not by this
//! crate. Route internals beyond liveness and service info belong to that
//! collaborator.

use std::env;
use std::time::SystemTime;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::bootstrap::CONFIG_ENV;

/// Process start time for uptime reporting.
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Build the served application router.
pub fn application() -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Service info payload.
#[derive(serde::Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
    config: Option<String>,
}

/// Service info, including the configuration location the application
/// picked up from its environment.
async fn api_info() -> impl IntoResponse {
    Json(ServiceInfo {
        name: "search-service",
        version: env!("CARGO_PKG_VERSION"),
        config: env::var(CONFIG_ENV).ok(),
    })
}

/// Health check endpoint (liveness)
async fn health_check() -> impl IntoResponse {
    let uptime = START_TIME.elapsed().map(|d| d.as_secs()).unwrap_or(0);

    Json(json!({
        "status": "healthy",
        "service": "search-service",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime,
    }))
}

/// 404 Not Found handler for undefined routes.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "Not found",
            }
        })),
    )
}
