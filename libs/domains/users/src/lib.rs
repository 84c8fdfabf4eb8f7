//! Users Domain
//!
//! Account management and password authentication for the accounts API.
//!
//! # Features
//!
//! - User CRUD operations with an embedded role profile
//! - Profile-code resolution against a fixed table ("C01" → admin, "C02" → user)
//! - Password hashing with Argon2
//! - Credential verification for login
//! - First-boot seeding of a default administrator
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (+ auth guards)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, id/profile validation, hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB / in-memory impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//! use axum_helpers::{JwtAuth, JwtConfig};
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//! let jwt = JwtAuth::new(&JwtConfig::new("a-development-secret-of-32-chars!!!!"));
//!
//! let router = handlers::router(service, jwt);
//! ```

pub mod auth_handlers;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongo_repository_impl;
pub mod password;
pub mod profile;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use auth_handlers::AuthState;
pub use error::{UserError, UserResult};
pub use models::{
    CreateUser, LoginRequest, Profile, Role, TokenResponse, UpdateUser, User, UserFilter,
    UserResponse,
};
pub use mongo_repository_impl::MongoUserRepository;
pub use password::PasswordHasher;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
