use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// Use as the router fallback for unmatched paths.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        "NotFound",
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
