//! Driving port for mutating the user directory.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId, UserPatch};

/// Use-case port consumed by the create, update, and delete handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Apply a partial update; fails with `not_found` for unknown ids.
    async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User, Error>;

    /// Remove a user. Unknown ids succeed.
    async fn delete_user(&self, id: &UserId) -> Result<(), Error>;
}
