//! Roster frontend: a thin client for the user directory API and a headless
//! list/edit view driven by the `roster-console` binary.

pub mod api;
pub mod error;
pub mod model;
pub mod view;

pub use api::{API_BASE, HttpUsersApi, UsersApi};
pub use error::ClientError;
pub use model::{ApiError, DeleteConfirmation, NewUser, User, UserPatch};
pub use view::UserListView;
