use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

/// Role profile embedded in every user document.
///
/// A value object, not an entity: it is resolved from a profile code at
/// create/update time and always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    /// Short selector code the profile was resolved from (e.g. "C01")
    pub code: String,
    /// Small integer discriminator for the role
    pub role_id: i32,
    /// Role name, one of "admin" / "user"
    pub role_name: Role,
}

/// User entity - persisted as a document in the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned unique identifier
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Display name
    pub name: String,
    /// Email, unique across all users (enforced by a unique index)
    pub email: String,
    /// Age in years
    pub age: i32,
    /// Argon2 hash of the password; the plaintext is never stored
    pub password_hash: String,
    /// Embedded role profile
    pub profile: Profile,
}

impl User {
    /// Create a new user (password must already be hashed by the service layer)
    pub fn new(name: String, email: String, age: i32, password_hash: String, profile: Profile) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            age,
            password_hash,
            profile,
        }
    }

    /// Apply a partial update.
    ///
    /// The password hash and profile arrive pre-resolved from the service
    /// layer; a supplied profile replaces the embedded one entirely.
    pub fn apply_update(
        &mut self,
        update: UpdateUser,
        new_password_hash: Option<String>,
        new_profile: Option<Profile>,
    ) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(hash) = new_password_hash {
            self.password_hash = hash;
        }
        if let Some(profile) = new_profile {
            self.profile = profile;
        }
    }
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Identifier as a 24-character hex string
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub profile: Profile,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            age: user.age,
            profile: user.profile,
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub age: i32,
    /// Profile selector code, e.g. "C01" for admin, "C02" for user
    #[validate(length(min = 1))]
    pub profile_code: String,
}

/// DTO for updating an existing user
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    pub age: Option<i32>,
    /// Re-resolved on update; replaces the embedded profile as a whole
    pub profile_code: Option<String>,
}

/// Query filters for listing users
#[derive(Debug, Clone, Default, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct UserFilter {
    /// Match users whose profile role name equals this value (e.g. "admin")
    pub role: Option<String>,
}

/// DTO for user login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
}
