//! User directory service implementing the driving ports.
//!
//! Each call delegates to exactly one [`UserRepository`] operation and maps
//! repository failures onto transport-agnostic [`Error`] values.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserId, UserPatch};

/// Pass-through service backed by a user repository.
pub struct UserDirectoryService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserDirectoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserDirectoryService<R> {
    /// Wrap a shared repository handle.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    warn!(%error, "user repository call failed");
    match error {
        UserRepositoryError::Unavailable { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserRepositoryError::InvalidDocument { message } => {
            Error::invalid_request(format!("user document rejected: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserDirectoryService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserDirectoryService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        self.repository
            .create(user)
            .await
            .map_err(map_repository_error)
    }

    async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User, Error> {
        self.repository
            .update(id, patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("user {id} not found")).with_details(json!({
                    "id": id.as_str(),
                    "code": "user_not_found",
                }))
            })
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(map_repository_error)
    }
}
