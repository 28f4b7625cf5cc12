//! Domain types, ports, and services.
//!
//! Public surface:
//! - [`User`], [`NewUser`], [`UserPatch`], [`UserId`]: the user record and the
//!   payloads that create and modify it.
//! - [`Error`], [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request correlation identifier.
//! - [`UserDirectoryService`]: driving-port implementation over a
//!   [`ports::UserRepository`].

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserId, UserPatch};
pub use self::user_directory::UserDirectoryService;
