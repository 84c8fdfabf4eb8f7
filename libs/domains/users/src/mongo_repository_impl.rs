//! MongoDB implementation of the user repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};

use crate::error::{UserError, UserResult};
use crate::models::{User, UserFilter};
use crate::repository::UserRepository;

const COLLECTION_NAME: &str = "users";

/// User repository backed by a MongoDB collection.
///
/// Email uniqueness is enforced atomically by a unique index on `email`;
/// this layer only classifies the resulting duplicate-key errors.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    /// Create the unique email index backing the uniqueness invariant.
    ///
    /// Must run before the first write; index creation is idempotent.
    pub async fn ensure_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(storage_error)?;

        Ok(())
    }
}

/// MongoDB reports unique index violations as error code 11000, either as
/// a write error (insert) or a command error (findAndModify).
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => write_error.code == 11000,
        ErrorKind::Command(ref command_error) => command_error.code == 11000,
        _ => false,
    }
}

fn storage_error(err: mongodb::error::Error) -> UserError {
    UserError::Storage(err.to_string())
}

fn classify_write_error(err: mongodb::error::Error, email: &str) -> UserError {
    if is_duplicate_key(&err) {
        UserError::DuplicateEmail(email.to_string())
    } else {
        storage_error(err)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: User) -> UserResult<User> {
        self.collection
            .insert_one(&user)
            .await
            .map_err(|e| classify_write_error(e, &user.email))?;

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: ObjectId) -> UserResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(storage_error)
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(storage_error)
    }

    async fn find_all(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        let query = match filter.role {
            Some(role) => doc! { "profile.role_name": role },
            None => doc! {},
        };

        let cursor = self.collection.find(query).await.map_err(storage_error)?;
        cursor.try_collect().await.map_err(storage_error)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let updated = self
            .collection
            .find_one_and_replace(doc! { "_id": user.id }, &user)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| classify_write_error(e, &user.email))?;

        match updated {
            Some(u) => {
                tracing::info!(user_id = %u.id, "Updated user");
                Ok(u)
            }
            None => Err(UserError::NotFound(user.id.to_hex())),
        }
    }

    async fn delete(&self, id: ObjectId) -> UserResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(storage_error)?;

        if result.deleted_count > 0 {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;
    use mongodb::Client;

    async fn test_repo() -> MongoUserRepository {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(&url).await.unwrap();
        let repo = MongoUserRepository::new(&client.database("domain_users_test"));
        repo.ensure_indexes().await.unwrap();
        repo
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn test_insert_find_delete_round_trip() {
        let repo = test_repo().await;

        let user = User::new(
            "Round Trip".to_string(),
            format!("{}@roundtrip.test", ObjectId::new().to_hex()),
            30,
            "hash".to_string(),
            profile::resolve("C02").unwrap(),
        );

        let created = repo.insert(user).await.unwrap();
        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, created.email);

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn test_duplicate_email_is_classified() {
        let repo = test_repo().await;
        let email = format!("{}@dup.test", ObjectId::new().to_hex());

        let first = User::new(
            "First".to_string(),
            email.clone(),
            30,
            "hash".to_string(),
            profile::resolve("C02").unwrap(),
        );
        let second = User::new(
            "Second".to_string(),
            email,
            25,
            "hash".to_string(),
            profile::resolve("C02").unwrap(),
        );

        let first = repo.insert(first).await.unwrap();
        let result = repo.insert(second).await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));

        repo.delete(first.id).await.unwrap();
    }
}
