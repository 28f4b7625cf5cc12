//! BSON document shapes for the `users` collection.
//!
//! These are internal to the persistence adapter. Reads are lenient: the
//! collection may hold documents written by other clients, so a missing or
//! oddly typed field decodes as an empty string or a zero age rather than
//! failing the whole listing. Numeric ages keep the value the store holds.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

use crate::domain::user::zero_age;
use crate::domain::{NewUser, User, UserId, UserPatch};

/// Stored form of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub(crate) name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub(crate) email: String,
    #[serde(
        default = "zero_age",
        deserialize_with = "lenient_age",
        serialize_with = "age_as_bson"
    )]
    pub(crate) age: Number,
}

impl From<NewUser> for UserDocument {
    fn from(value: NewUser) -> Self {
        let NewUser { name, email, age } = value;
        Self {
            id: None,
            name,
            email,
            age,
        }
    }
}

impl UserDocument {
    /// Convert to the domain record. Documents without `_id` cannot come back
    /// from a query, so `None` here signals a driver contract violation.
    pub(crate) fn into_user(self) -> Option<User> {
        let Self {
            id,
            name,
            email,
            age,
        } = self;
        id.map(|oid| User::new(UserId::new(oid.to_hex()), NewUser { name, email, age }))
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Bson::deserialize(deserializer)? {
        Bson::String(value) => Ok(value),
        _ => Ok(String::new()),
    }
}

/// Numbers written by other drivers may be 32-bit, 64-bit or doubles.
fn lenient_age<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(age_from_bson(&Bson::deserialize(deserializer)?))
}

fn age_from_bson(value: &Bson) -> Number {
    match value {
        Bson::Int32(age) => Number::from(*age),
        Bson::Int64(age) => Number::from(*age),
        Bson::Double(age) => Number::from_f64(*age).unwrap_or_else(zero_age),
        _ => zero_age(),
    }
}

/// Integral ages are stored as `Int64`, everything else as a double.
pub(crate) fn age_to_bson(age: &Number) -> Bson {
    age.as_i64().map_or_else(
        || Bson::Double(age.as_f64().unwrap_or_default()),
        Bson::Int64,
    )
}

fn age_as_bson<S>(age: &Number, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    age_to_bson(age).serialize(serializer)
}

/// Parse a path identifier into an ObjectId filter.
///
/// Returns `None` when `id` is not ObjectId hex; such an id matches nothing.
pub(crate) fn id_filter(id: &UserId) -> Option<Document> {
    ObjectId::parse_str(id.as_str())
        .ok()
        .map(|oid| doc! { "_id": oid })
}

/// `$set` update for the fields present in `patch`, or `None` when empty.
pub(crate) fn set_update(patch: &UserPatch) -> Option<Document> {
    let mut fields = Document::new();
    if let Some(name) = &patch.name {
        fields.insert("name", name.as_str());
    }
    if let Some(email) = &patch.email {
        fields.insert("email", email.as_str());
    }
    if let Some(age) = &patch.age {
        fields.insert("age", age_to_bson(age));
    }
    (!fields.is_empty()).then(|| doc! { "$set": fields })
}

/// Driver call an update resolves to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UpdatePlan {
    /// The id cannot match any document.
    NoMatch,
    /// Nothing to write; read the current document.
    Read { filter: Document },
    /// `find_one_and_update` with this filter and `$set`.
    Write { filter: Document, update: Document },
}

impl UpdatePlan {
    pub(crate) fn for_patch(id: &UserId, patch: &UserPatch) -> Self {
        let Some(filter) = id_filter(id) else {
            return Self::NoMatch;
        };
        match set_update(patch) {
            Some(update) => Self::Write { filter, update },
            None => Self::Read { filter },
        }
    }
}
