use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserFilter};

/// Repository trait for User persistence.
///
/// Implementations translate store failures into domain error kinds:
/// uniqueness violations become [`UserError::DuplicateEmail`], anything
/// unclassified becomes [`UserError::Storage`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Get a user by ID; absent users are `Ok(None)`, not an error
    async fn find_by_id(&self, id: ObjectId) -> UserResult<Option<User>>;

    /// Get a user by email; absent users are `Ok(None)`, not an error
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// List users, optionally filtered by role name; store-native order
    async fn find_all(&self, filter: UserFilter) -> UserResult<Vec<User>>;

    /// Replace an existing user document as a whole
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete a user by ID; returns whether a document was removed
    async fn delete(&self, id: ObjectId) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing).
///
/// Mirrors the store semantics the MongoDB implementation gets from its
/// unique email index.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<ObjectId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: ObjectId) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let result = users
            .values()
            .filter(|u| match filter.role {
                Some(ref role) => u.profile.role_name.to_string() == *role,
                None => true,
            })
            .cloned()
            .collect();

        Ok(result)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_hex()));
        }

        // Uniqueness check excluding the document being replaced, so
        // re-writing a user's own email is not a conflict
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: ObjectId) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
