//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the workspace's Axum apps.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT configuration, signing/verification, and route guards
//! - **[`server`]**: Router composition, health checks, graceful shutdown
//! - **[`http`]**: Cross-cutting HTTP middleware (security headers, CORS)
//! - **[`errors`]**: Structured error responses and fallback handlers
//! - **[`extractors`]**: Custom extractors (validated JSON)

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{
    jwt_auth_middleware, require_admin, JwtAuth, JwtClaims, JwtConfig, ACCESS_TOKEN_TTL,
};

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, shutdown_signal,
    HealthResponse,
};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export error types
pub use errors::ErrorResponse;

// Re-export extractors
pub use extractors::ValidatedJson;
