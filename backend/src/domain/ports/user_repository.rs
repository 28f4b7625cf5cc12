//! Driven port for the user document store.
//!
//! Adapters translate each operation into exactly one store call. No
//! validation, retries, or cross-call ordering is provided here.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, UserPatch};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The store could not be reached.
        Unavailable {
            /// Driver description of the connectivity failure.
            message: String,
        } => "user store unavailable: {message}",
        /// The store refused the document shape.
        InvalidDocument {
            /// Driver description of the rejection.
            message: String,
        } => "user document rejected: {message}",
        /// Any other query or write failure.
        Query {
            /// Driver description of the failure.
            message: String,
        } => "user store query failed: {message}",
    }
}

/// Persistence port for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in store order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Persist a new user and return it with its assigned identifier.
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Apply `patch` to the user with `id`.
    ///
    /// Returns `Ok(None)` when no user matches. An empty patch performs no
    /// write and returns the current record.
    async fn update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Remove the user with `id`. Missing users are not an error.
    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError>;

    /// Fetch one user.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
}
