//! Domain ports for the hexagonal boundary.
//!
//! [`UsersQuery`] and [`UsersCommand`] are driving ports called by inbound
//! adapters. [`UserRepository`] is the driven port implemented by the
//! document-store adapters under `outbound::persistence`.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
