//! Application-specific readiness handler with a real MongoDB check.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Readiness check endpoint that pings MongoDB.
///
/// Returns 200 when the database answers, 503 otherwise.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let healthy =
        database::mongodb::check_health(&state.mongo, state.config.mongo.database()).await;

    let body = json!({
        "status": if healthy { "ready" } else { "not ready" },
        "database": if healthy { "connected" } else { "disconnected" },
    });

    let status = if healthy {
        StatusCode::OK
    } else {
        tracing::error!("Readiness check failed: MongoDB did not answer ping");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body)).into_response()
}
