use axum::{routing::get, Router};

pub mod auth;
pub mod health;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Takes a reference to AppState; every sub-router applies its own state,
/// so the returned router is stateless.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/auth", auth::router(state))
        .nest("/users", users::router(state))
}

/// Creates a router with the /ready endpoint that performs an actual
/// MongoDB health check. Merged with the stateless app router from
/// `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
