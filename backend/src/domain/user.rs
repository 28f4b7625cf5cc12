//! User records and the payloads that create and modify them.
//!
//! None of these types validate their contents beyond JSON shape: the
//! directory stores whatever name, email, and age it is given. Fields left
//! out of a creation body are stored as an empty string or a zero age, and
//! any JSON number is an acceptable age.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// Store-assigned user identifier.
///
/// The value is opaque to the domain. The MongoDB adapter issues and expects
/// 24-character ObjectId hex strings; an identifier in any other form simply
/// never matches a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = String, example = "665f1c2e9d3b4a0012345678")]
    id: UserId,
    #[schema(example = "Ann")]
    name: String,
    #[schema(example = "ann@mail.com")]
    email: String,
    #[schema(value_type = f64, example = 25)]
    age: Number,
}

impl User {
    /// Assemble a user from an identifier and its fields.
    #[must_use]
    pub fn new(id: UserId, fields: NewUser) -> Self {
        let NewUser { name, email, age } = fields;
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age as stored, integral or not.
    #[must_use]
    pub fn age(&self) -> &Number {
        &self.age
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    ///
    /// # Examples
    /// ```
    /// use roster_backend::domain::{NewUser, User, UserId, UserPatch};
    ///
    /// let mut user = User::new(
    ///     UserId::new("a"),
    ///     NewUser { name: "Ann".into(), email: "ann@mail.com".into(), age: 25.into() },
    /// );
    /// user.apply(&UserPatch { name: Some("Annie".into()), ..UserPatch::default() });
    /// assert_eq!(user.name(), "Annie");
    /// assert_eq!(user.email(), "ann@mail.com");
    /// ```
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
        if let Some(age) = &patch.age {
            self.age.clone_from(age);
        }
    }
}

/// Fields supplied when creating a user; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Display name.
    #[serde(default)]
    #[schema(example = "Ann")]
    pub name: String,
    /// Contact address.
    #[serde(default)]
    #[schema(example = "ann@mail.com")]
    pub email: String,
    /// Age in years.
    #[serde(default = "zero_age")]
    #[schema(value_type = f64, example = 25)]
    pub age: Number,
}

/// Age given to records that never had one.
pub(crate) fn zero_age() -> Number {
    Number::from(0_u8)
}

/// Partial update; each field is replaced only when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// Replacement display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub age: Option<Number>,
}

impl UserPatch {
    /// True when the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}
