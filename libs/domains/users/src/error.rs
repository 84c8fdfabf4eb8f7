use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_helpers::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User {0} not found")]
    NotFound(String),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    /// Deliberately identical for unknown email and wrong password so the
    /// login endpoint cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid profile code: {0}")]
    InvalidProfileCode(String),

    #[error("Malformed user id: {0}")]
    MalformedIdentifier(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),

    /// Wraps any unclassified store failure; the detail is logged but
    /// never surfaced to the caller.
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            UserError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("User {} not found", id),
            ),
            UserError::DuplicateEmail(email) => (
                StatusCode::CONFLICT,
                "Conflict",
                format!("User with email '{}' already exists", email),
            ),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Invalid email or password".to_string(),
            ),
            UserError::InvalidProfileCode(code) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                format!("Invalid profile code: {}", code),
            ),
            UserError::MalformedIdentifier(id) => (
                StatusCode::BAD_REQUEST,
                "BadRequest",
                format!("Malformed user id: {}", id),
            ),
            UserError::PasswordHash(detail) => {
                tracing::error!("Password hash error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "An internal error occurred".to_string(),
                )
            }
            UserError::Token(detail) => {
                tracing::error!("Token error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "An internal error occurred".to_string(),
                )
            }
            UserError::Storage(detail) => {
                tracing::error!("Storage error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(error, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // Must not distinguish "no such email" from "wrong password"
        assert_eq!(
            UserError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_errors_carry_context() {
        assert!(UserError::InvalidProfileCode("ZZ99".into())
            .to_string()
            .contains("ZZ99"));
        assert!(UserError::MalformedIdentifier("123".into())
            .to_string()
            .contains("123"));
        assert!(UserError::DuplicateEmail("a@b.com".into())
            .to_string()
            .contains("a@b.com"));
    }
}
