//! Driving port for reading the user directory.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Use-case port consumed by the HTTP list handler.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user in the directory.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
