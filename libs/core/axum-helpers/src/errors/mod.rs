pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses across the workspace's APIs:
/// - `error`: machine-readable identifier (e.g. "Conflict")
/// - `message`: human-readable error message
/// - `details`: optional structured details (e.g. per-field validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Conflict",
///   "message": "User with email 'a@b.com' already exists"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g. validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_without_empty_details() {
        let body = serde_json::to_value(ErrorResponse::new("NotFound", "missing")).unwrap();
        assert_eq!(body["error"], "NotFound");
        assert_eq!(body["message"], "missing");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let body = serde_json::to_value(
            ErrorResponse::new("BadRequest", "validation failed")
                .with_details(serde_json::json!({"email": ["invalid"]})),
        )
        .unwrap();
        assert_eq!(body["details"]["email"][0], "invalid");
    }
}
