//! Process-local `UserRepository` for tests and store-less development.
//!
//! Records live in insertion order behind a mutex and vanish with the
//! process. Identifiers are freshly minted ObjectId hex strings so clients see
//! the same id shape as with MongoDB.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserId, UserPatch};

/// In-memory implementation of the [`UserRepository`] port.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    fn users(&self) -> Result<MutexGuard<'_, Vec<User>>, UserRepositoryError> {
        self.users
            .lock()
            .map_err(|_| UserRepositoryError::query("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users()?.clone())
    }

    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let created = User::new(UserId::new(ObjectId::new().to_hex()), user);
        self.users()?.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut users = self.users()?;
        Ok(users.iter_mut().find(|user| user.id() == id).map(|user| {
            user.apply(patch);
            user.clone()
        }))
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        self.users()?.retain(|user| user.id() != id);
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users()?.iter().find(|user| user.id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::Number;

    #[fixture]
    fn ann() -> NewUser {
        NewUser {
            name: "Ann".to_owned(),
            email: "ann@mail.com".to_owned(),
            age: Number::from(25),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_object_id_shaped_ids(ann: NewUser) {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(ann).await.expect("create");

        assert_eq!(created.id().as_str().len(), 24);
        assert!(ObjectId::parse_str(created.id().as_str()).is_ok());
        assert_eq!(repo.list().await.expect("list"), vec![created]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_returns_post_update_record(ann: NewUser) {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(ann).await.expect("create");
        let patch = UserPatch {
            name: Some("Annie".to_owned()),
            ..UserPatch::default()
        };

        let updated = repo
            .update(created.id(), &patch)
            .await
            .expect("update")
            .expect("user exists");

        assert_eq!(updated.name(), "Annie");
        assert_eq!(updated.email(), "ann@mail.com");
        assert_eq!(updated.age(), &Number::from(25));
        assert_eq!(
            repo.find_by_id(created.id()).await.expect("find"),
            Some(updated)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_id_is_none() {
        let repo = InMemoryUserRepository::new();
        let result = repo
            .update(&UserId::new("nope"), &UserPatch::default())
            .await
            .expect("update");
        assert!(result.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_is_idempotent(ann: NewUser) {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(ann).await.expect("create");

        repo.delete(created.id()).await.expect("first delete");
        repo.delete(created.id()).await.expect("second delete");

        assert!(repo.list().await.expect("list").is_empty());
    }
}
