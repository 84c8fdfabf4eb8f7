use utoipa::OpenApi;

/// Accounts API documentation, served by Swagger UI at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        description = "User account management and password-based authentication"
    ),
    components(schemas(
        domain_users::CreateUser,
        domain_users::UpdateUser,
        domain_users::UserResponse,
        domain_users::Profile,
        domain_users::Role,
        domain_users::LoginRequest,
        domain_users::TokenResponse,
        axum_helpers::ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Login and token issuance"),
        (name = "users", description = "User account management")
    )
)]
pub struct ApiDoc;
