//! Shared MongoDB client for the persistence adapters.
//!
//! One [`MongoStore`] is built at start-up and cloned into every adapter. The
//! driver keeps its own connection pool behind the client, so clones are
//! cheap and share connections.
//!
//! Building the client does not contact the server; [`MongoStore::ping`]
//! does, and start-up uses it to log whether the store is reachable.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use super::documents::UserDocument;

/// Errors raised while building or probing the store client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string could not be parsed or the client not built.
    #[error("invalid document store configuration: {message}")]
    Configuration {
        /// Driver description of the problem.
        message: String,
    },

    /// The server did not answer a ping.
    #[error("document store unreachable: {message}")]
    Unreachable {
        /// Driver description of the failed ping.
        message: String,
    },
}

impl StoreError {
    /// Create a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unreachable error with the given message.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }
}

/// Connection settings for the document store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use roster_backend::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017")
///     .with_database("roster")
///     .with_server_selection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database(), "roster");
/// assert_eq!(config.collection(), "users");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database: String,
    collection: String,
    server_selection_timeout: Option<Duration>,
}

impl StoreConfig {
    /// Database used when the connection string names none.
    pub const DEFAULT_DATABASE: &'static str = "test";
    /// Collection holding user documents.
    pub const DEFAULT_COLLECTION: &'static str = "users";

    /// Settings for `uri` with the default database and collection.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: Self::DEFAULT_DATABASE.to_owned(),
            collection: Self::DEFAULT_COLLECTION.to_owned(),
            server_selection_timeout: None,
        }
    }

    /// Use a different database.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Use a different collection.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Bound how long the driver waits for a usable server per operation.
    ///
    /// Leaving this unset keeps the driver default.
    #[must_use]
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = Some(timeout);
        self
    }

    /// Connection string.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Collection name.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// Handle to the configured database.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    collection: String,
}

impl MongoStore {
    /// Build a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configuration`] when the connection string cannot
    /// be parsed or the client cannot be constructed.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| StoreError::configuration(err.to_string()))?;
        options.app_name = Some("roster-backend".to_owned());
        if let Some(timeout) = config.server_selection_timeout {
            options.server_selection_timeout = Some(timeout);
        }

        let client =
            Client::with_options(options).map_err(|err| StoreError::configuration(err.to_string()))?;

        Ok(Self {
            database: client.database(config.database()),
            collection: config.collection().to_owned(),
        })
    }

    /// Round-trip a `ping` command to the server.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unreachable`] when the server does not answer.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|err| StoreError::unreachable(err.to_string()))
    }

    pub(crate) fn users(&self) -> Collection<UserDocument> {
        self.database.collection(&self.collection)
    }
}
