use axum::{extract::State, routing::post, Json, Router};
use axum_helpers::{JwtAuth, ValidatedJson};

use crate::error::{UserError, UserResult};
use crate::models::{LoginRequest, TokenResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Application state for auth handlers
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt: self.jwt.clone(),
        }
    }
}

/// Create the auth router; login is the only unauthenticated route.
pub fn router<R: UserRepository + 'static>(state: AuthState<R>) -> Router {
    Router::new().route("/login", post(login)).with_state(state)
}

/// Exchange credentials for a signed access token
///
/// POST /auth/login
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<TokenResponse>> {
    let user = state
        .service
        .verify_credentials(&input.email, &input.password)
        .await?;

    let role = user.profile.role_name.to_string();
    let access_token = state
        .jwt
        .create_access_token(&user.id, &user.email, &role)
        .map_err(|e| {
            tracing::error!("Failed to create access token: {:?}", e);
            UserError::Token("Failed to create token".to_string())
        })?;

    Ok(Json(TokenResponse { access_token }))
}
