use super::jwt::{JwtAuth, JwtClaims};
use crate::errors::ErrorResponse;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Extract a bearer token from the Authorization header.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new("Unauthorized", message)),
    )
        .into_response()
}

/// JWT authentication middleware.
///
/// Validates the bearer token from the Authorization header and inserts
/// the decoded [`JwtClaims`] into request extensions on success.
///
/// # Example
///
/// ```ignore
/// use axum::{middleware, Router};
/// use axum_helpers::{jwt_auth_middleware, JwtAuth};
///
/// let protected = Router::new()
///     .route_layer(middleware::from_fn_with_state(jwt.clone(), jwt_auth_middleware));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(&headers) {
        Some(t) => t,
        None => {
            tracing::debug!("No bearer token in Authorization header");
            return Err(unauthorized("No token provided"));
        }
    };

    let claims = match auth.verify_token(&token) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("JWT verification failed: {}", e);
            return Err(unauthorized("Invalid token"));
        }
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Role guard that only lets requests with an `admin` claim through.
///
/// Must run after [`jwt_auth_middleware`], which populates the claims
/// extension.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, Response> {
    match request.extensions().get::<JwtClaims>() {
        Some(claims) if claims.role == "admin" => Ok(next.run(request).await),
        Some(claims) => {
            tracing::debug!(role = %claims.role, "Rejecting non-admin request");
            Err((
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::new(
                    "Forbidden",
                    "This operation requires the admin role",
                )),
            )
                .into_response())
        }
        None => Err(unauthorized("No token provided")),
    }
}
