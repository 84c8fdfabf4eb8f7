//! Router-level tests covering the auth and users endpoints, including the
//! bearer-token and admin guards.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::{JwtAuth, JwtConfig};
use domain_users::{
    auth_handlers, handlers, seed, AuthState, InMemoryUserRepository, PasswordHasher, UserService,
};
use tower::ServiceExt;

fn test_app() -> Router {
    let params = argon2::Params::new(8, 1, 1, None).unwrap();
    let service = UserService::with_hasher(
        InMemoryUserRepository::new(),
        PasswordHasher::with_params(params),
    );
    let jwt = JwtAuth::new(&JwtConfig::new("integration-test-secret-32-chars-long!"));

    Router::new()
        .nest("/users", handlers::router(service.clone(), jwt.clone()))
        .nest(
            "/auth",
            auth_handlers::router(AuthState {
                service,
                jwt,
            }),
        )
}

async fn seeded_app() -> Router {
    let params = argon2::Params::new(8, 1, 1, None).unwrap();
    let service = UserService::with_hasher(
        InMemoryUserRepository::new(),
        PasswordHasher::with_params(params),
    );
    seed::ensure_default_admin(&service).await;

    let jwt = JwtAuth::new(&JwtConfig::new("integration-test-secret-32-chars-long!"));

    Router::new()
        .nest("/users", handlers::router(service.clone(), jwt.clone()))
        .nest(
            "/auth",
            auth_handlers::router(AuthState {
                service,
                jwt,
            }),
        )
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn authed_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            serde_json::json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_login_returns_token_for_seeded_admin() {
    let app = seeded_app().await;

    let token = login(&app, seed::DEFAULT_ADMIN_EMAIL, "admin123").await;
    assert!(!token.is_empty());

    let jwt = JwtAuth::new(&JwtConfig::new("integration-test-secret-32-chars-long!"));
    let claims = jwt.verify_token(&token).unwrap();
    assert_eq!(claims.email, seed::DEFAULT_ADMIN_EMAIL);
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
async fn test_login_failures_are_identical() {
    let app = seeded_app().await;

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            serde_json::json!({ "email": seed::DEFAULT_ADMIN_EMAIL, "password": "nope" }),
        ))
        .await
        .unwrap();
    let unknown_email = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            serde_json::json!({ "email": "ghost@example.com", "password": "admin123" }),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Same response body for both, so accounts cannot be enumerated
    assert_eq!(
        body_json(wrong_password).await,
        body_json(unknown_email).await
    );
}

#[tokio::test]
async fn test_users_routes_require_token() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_can_create_and_list_users() {
    let app = seeded_app().await;
    let token = login(&app, seed::DEFAULT_ADMIN_EMAIL, "admin123").await;

    let created = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/users",
            &token,
            serde_json::json!({
                "name": "Juan",
                "email": "juan@test.com",
                "password": "secret1",
                "age": 25,
                "profile_code": "C02"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let body = body_json(created).await;
    assert_eq!(body["profile"]["role_id"], 2);
    assert_eq!(body["profile"]["role_name"], "user");
    assert!(body.get("password_hash").is_none());

    let listed = app
        .clone()
        .oneshot(authed_request("GET", "/users?role=user", &token))
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let listed = body_json(listed).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["email"], "juan@test.com");
}

#[tokio::test]
async fn test_duplicate_email_returns_conflict() {
    let app = seeded_app().await;
    let token = login(&app, seed::DEFAULT_ADMIN_EMAIL, "admin123").await;

    let payload = serde_json::json!({
        "name": "Juan",
        "email": "juan@test.com",
        "password": "secret1",
        "age": 25,
        "profile_code": "C02"
    });

    let first = app
        .clone()
        .oneshot(authed_json_request("POST", "/users", &token, payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .clone()
        .oneshot(authed_json_request("POST", "/users", &token, payload))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_non_admin_cannot_mutate() {
    let app = seeded_app().await;
    let admin_token = login(&app, seed::DEFAULT_ADMIN_EMAIL, "admin123").await;

    app.clone()
        .oneshot(authed_json_request(
            "POST",
            "/users",
            &admin_token,
            serde_json::json!({
                "name": "Juan",
                "email": "juan@test.com",
                "password": "secret1",
                "age": 25,
                "profile_code": "C02"
            }),
        ))
        .await
        .unwrap();

    let user_token = login(&app, "juan@test.com", "secret1").await;

    // Reads are allowed for any authenticated user
    let listed = app
        .clone()
        .oneshot(authed_request("GET", "/users", &user_token))
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);

    // Mutations are not
    let forbidden = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/users",
            &user_token,
            serde_json::json!({
                "name": "Other",
                "email": "other@test.com",
                "password": "secret1",
                "age": 30,
                "profile_code": "C02"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = seeded_app().await;
    let token = login(&app, seed::DEFAULT_ADMIN_EMAIL, "admin123").await;

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/users/123", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let missing = app
        .clone()
        .oneshot(authed_request("GET", "/users/507f1f77bcf86cd799439011", &token))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shape_validation_runs_before_core() {
    let app = seeded_app().await;
    let token = login(&app, seed::DEFAULT_ADMIN_EMAIL, "admin123").await;

    // Invalid email and too-short password are rejected by the extractor
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/users",
            &token,
            serde_json::json!({
                "name": "Bad",
                "email": "not-an-email",
                "password": "123",
                "age": 20,
                "profile_code": "C02"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
