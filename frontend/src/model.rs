//! Wire types exchanged with the user directory API.
//!
//! These mirror the backend's JSON shapes without depending on the backend
//! crate, so the client can talk to any deployment of the API.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A stored user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier. Also accepted as `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Age in years; any JSON number the server stored.
    pub age: Number,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Age in years.
    pub age: Number,
}

impl NewUser {
    /// Age given to users created from the list view.
    pub const DEFAULT_AGE: u32 = 25;

    /// Derive a user from a bare name: `{name}@mail.com`, aged 25.
    ///
    /// # Examples
    /// ```
    /// use roster_frontend::NewUser;
    ///
    /// let user = NewUser::from_name("Ann");
    /// assert_eq!(user.email, "Ann@mail.com");
    /// assert_eq!(user.age.as_u64(), Some(25));
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: format!("{name}@mail.com"),
            age: Self::DEFAULT_AGE.into(),
        }
    }
}

/// Body of `PUT /users/{id}`; absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// Replacement display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Number>,
}

impl UserPatch {
    /// Patch replacing only the name.
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Body of `DELETE /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    /// `"User deleted"`.
    pub message: String,
}

/// Error payload the API sends with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable category such as `not_found`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[serde(default)]
    pub trace_id: Option<String>,
}
