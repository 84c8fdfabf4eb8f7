use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserFilter, UserResponse};
use crate::password::PasswordHasher;
use crate::profile;
use crate::repository::UserRepository;

/// Service layer for user business logic.
///
/// Validates identifiers and profile codes locally, delegates hashing to
/// [`PasswordHasher`], and persistence to the repository. Concurrency
/// correctness of the email-uniqueness invariant is the store's job; a
/// violation is surfaced once as [`UserError::DuplicateEmail`] with no
/// retry.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

/// Parse a path identifier into an ObjectId.
///
/// Runs before any store round-trip so malformed input fails fast and
/// store-specific error shapes never leak.
fn parse_object_id(id: &str) -> UserResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| UserError::MalformedIdentifier(id.to_string()))
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher: PasswordHasher::new(),
        }
    }

    /// Construct with a custom-cost hasher.
    pub fn with_hasher(repository: R, hasher: PasswordHasher) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher,
        }
    }

    /// Create a new user.
    ///
    /// The profile code is resolved before the password is hashed, so a
    /// request that will be rejected anyway never pays for the hash.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        let profile = profile::resolve(&input.profile_code)?;

        let password_hash = self.hasher.hash(&input.password)?;

        let user = User::new(input.name, input.email, input.age, password_hash, profile);

        let created = self.repository.insert(user).await?;
        Ok(created.into())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> UserResult<UserResponse> {
        let oid = parse_object_id(id)?;

        let user = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        Ok(user.into())
    }

    /// Look up a user by email; absence is not an error.
    pub async fn find_by_email(&self, email: &str) -> UserResult<Option<UserResponse>> {
        let user = self.repository.find_by_email(email).await?;
        Ok(user.map(|u| u.into()))
    }

    /// List users, optionally filtered by role name
    pub async fn list_users(&self, filter: UserFilter) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.find_all(filter).await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Update a user.
    ///
    /// A supplied profile code is re-resolved and replaces the embedded
    /// profile as a whole; a supplied password is re-hashed.
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<UserResponse> {
        let oid = parse_object_id(id)?;

        let mut user = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        let new_profile = match input.profile_code {
            Some(ref code) => Some(profile::resolve(code)?),
            None => None,
        };

        let new_password_hash = match input.password {
            Some(ref password) => Some(self.hasher.hash(password)?),
            None => None,
        };

        user.apply_update(input, new_password_hash, new_profile);

        let updated = self.repository.update(user).await?;
        Ok(updated.into())
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        let oid = parse_object_id(id)?;

        let deleted = self.repository.delete(oid).await?;

        if !deleted {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Verify user credentials (for login).
    ///
    /// An unknown email and a wrong password both fail with the same
    /// [`UserError::InvalidCredentials`], so the caller cannot tell which
    /// one happened.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> UserResult<UserResponse> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user.into())
    }
}
