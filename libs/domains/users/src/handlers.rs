use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use axum_helpers::{jwt_auth_middleware, require_admin, JwtAuth, ValidatedJson};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, UserFilter, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router.
///
/// Every route requires a valid bearer token; the mutating routes
/// (create/update/delete) additionally require the admin role, mirroring
/// the guard stack of the surrounding app. The guards live in
/// `axum-helpers` middleware; handlers only call the service.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, jwt: JwtAuth) -> Router {
    let shared_service = Arc::new(service);

    let admin_routes = Router::new()
        .route("/", post(create_user))
        .route("/{id}", patch(update_user).delete(delete_user))
        .route_layer(middleware::from_fn(require_admin));

    let authenticated_routes = Router::new()
        .route("/", get(list_users))
        .route("/{id}", get(get_user));

    admin_routes
        .merge(authenticated_routes)
        .route_layer(middleware::from_fn_with_state(jwt, jwt_auth_middleware))
        .with_state(shared_service)
}

/// List users with an optional role filter
///
/// GET /users?role=admin
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Query(filter): Query<UserFilter>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.list_users(filter).await?;
    Ok(Json(users))
}

/// Create a new user (admin only)
///
/// POST /users
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
///
/// GET /users/:id
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}

/// Update a user (admin only)
///
/// PATCH /users/:id
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update_user(&id, input).await?;
    Ok(Json(user))
}

/// Delete a user (admin only)
///
/// DELETE /users/:id
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<impl IntoResponse> {
    service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
