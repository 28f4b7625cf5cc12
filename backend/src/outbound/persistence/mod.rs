//! Persistence adapters for the user directory.
//!
//! - [`MongoUserRepository`]: MongoDB collection via the official async
//!   driver, sharing one [`MongoStore`] client.
//! - [`InMemoryUserRepository`]: mutex-guarded vector for tests and local
//!   runs without a database.
//!
//! Document shapes and driver error classification are private to this
//! module; the domain only ever sees `User` and `UserRepositoryError`.
//!
//! # Example
//!
//! ```no_run
//! use roster_backend::outbound::persistence::{MongoStore, MongoUserRepository, StoreConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MongoStore::connect(&StoreConfig::new("mongodb://localhost:27017")).await?;
//! let repo = MongoUserRepository::new(&store);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod documents;
mod memory_user_repository;
mod mongo_error_mapping;
mod mongo_user_repository;
mod store;

pub use memory_user_repository::InMemoryUserRepository;
pub use mongo_user_repository::MongoUserRepository;
pub use store::{MongoStore, StoreConfig, StoreError};
