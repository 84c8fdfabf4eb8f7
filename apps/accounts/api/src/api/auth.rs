use axum::Router;
use domain_users::{auth_handlers, AuthState};

pub fn router(state: &crate::state::AppState) -> Router {
    auth_handlers::router(AuthState {
        service: state.service.clone(),
        jwt: state.jwt.clone(),
    })
}
