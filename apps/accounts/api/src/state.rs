//! Application state management.
//!
//! The shared state handed to request handlers: configuration, the user
//! service bound to its MongoDB repository, the token issuer, and the
//! MongoDB client (kept for readiness checks and shutdown).

use axum_helpers::JwtAuth;
use database::mongodb::Client;
use domain_users::{MongoUserRepository, UserService};

/// Shared application state.
///
/// Cloned per handler; every field is an inexpensive handle clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// User service bound to the MongoDB repository
    pub service: UserService<MongoUserRepository>,
    /// JWT token issuer
    pub jwt: JwtAuth,
    /// MongoDB client handle
    pub mongo: Client,
}
