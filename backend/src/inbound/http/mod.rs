//! HTTP inbound adapter exposing the user directory as REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;

pub use error::ApiResult;
