//! Classification of MongoDB driver errors into repository errors.

use mongodb::error::{Error as MongoError, ErrorKind};
use tracing::debug;

use crate::domain::ports::UserRepositoryError;

/// Map a driver failure onto the [`UserRepositoryError`] taxonomy.
///
/// Connectivity problems become `Unavailable`, shape rejections become
/// `InvalidDocument`, and the rest are `Query` failures.
pub(super) fn map_mongo_error(error: &MongoError) -> UserRepositoryError {
    debug!(kind = ?error.kind, "mongodb operation failed");
    let message = error.to_string();
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Authentication { .. } => UserRepositoryError::unavailable(message),
        ErrorKind::Write(_) | ErrorKind::BsonSerialization(_) | ErrorKind::InvalidArgument { .. } => {
            UserRepositoryError::invalid_document(message)
        }
        _ => UserRepositoryError::query(message),
    }
}
