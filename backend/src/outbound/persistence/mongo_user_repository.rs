//! MongoDB-backed `UserRepository` implementation.
//!
//! Every port operation is one driver call against the `users` collection:
//! `find`, `insert_one`, `find_one_and_update`, `delete_one`, or `find_one`.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserId, UserPatch};

use super::documents::{UpdatePlan, UserDocument, id_filter};
use super::mongo_error_mapping::map_mongo_error;
use super::store::MongoStore;

/// Document-store implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a repository over the store's user collection.
    #[must_use]
    pub fn new(store: &MongoStore) -> Self {
        Self {
            users: store.users(),
        }
    }

    async fn find_one(&self, filter: Document) -> Result<Option<User>, UserRepositoryError> {
        self.users
            .find_one(filter)
            .await
            .map_err(|err| map_mongo_error(&err))?
            .map(into_user)
            .transpose()
    }
}

fn into_user(document: UserDocument) -> Result<User, UserRepositoryError> {
    document
        .into_user()
        .ok_or_else(|| UserRepositoryError::query("stored user document has no _id"))
}

fn collect_users(documents: Vec<UserDocument>) -> Result<Vec<User>, UserRepositoryError> {
    documents.into_iter().map(into_user).collect()
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let cursor = self
            .users
            .find(doc! {})
            .await
            .map_err(|err| map_mongo_error(&err))?;
        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(&err))?;
        collect_users(documents)
    }

    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let document = UserDocument::from(user.clone());
        let inserted = self
            .users
            .insert_one(&document)
            .await
            .map_err(|err| map_mongo_error(&err))?;
        let oid = inserted.inserted_id.as_object_id().ok_or_else(|| {
            UserRepositoryError::query(format!(
                "store assigned a non-ObjectId identifier: {}",
                inserted.inserted_id
            ))
        })?;
        Ok(User::new(UserId::new(oid.to_hex()), user))
    }

    async fn update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserRepositoryError> {
        let (filter, update) = match UpdatePlan::for_patch(id, patch) {
            UpdatePlan::NoMatch => return Ok(None),
            UpdatePlan::Read { filter } => return self.find_one(filter).await,
            UpdatePlan::Write { filter, update } => (filter, update),
        };
        self.users
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|err| map_mongo_error(&err))?
            .map(into_user)
            .transpose()
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let Some(filter) = id_filter(id) else {
            return Ok(());
        };
        self.users
            .delete_one(filter)
            .await
            .map(|_| ())
            .map_err(|err| map_mongo_error(&err))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        match id_filter(id) {
            Some(filter) => self.find_one(filter).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Document, oid::ObjectId};
    use rstest::rstest;

    fn decode(document: Document) -> UserDocument {
        bson::from_document(document).expect("decode document")
    }

    #[rstest]
    fn listing_keeps_documents_written_by_other_clients() {
        let documents = vec![
            decode(doc! { "_id": ObjectId::new(), "name": "Ann", "email": "a", "age": 25 }),
            decode(doc! { "_id": ObjectId::new(), "name": "Bo", "age": 25.5 }),
            decode(doc! { "_id": ObjectId::new(), "name": "Cy", "age": -3 }),
            decode(doc! { "_id": ObjectId::new(), "name": "Di", "age": "forty" }),
        ];

        let users = collect_users(documents).expect("every document converts");

        let listed: Vec<_> = users
            .iter()
            .map(|user| (user.name(), user.age().as_f64()))
            .collect();
        assert_eq!(
            listed,
            [
                ("Ann", Some(25.0)),
                ("Bo", Some(25.5)),
                ("Cy", Some(-3.0)),
                ("Di", Some(0.0)),
            ]
        );
    }

    #[rstest]
    fn document_without_id_is_a_query_failure() {
        let documents = vec![decode(doc! { "name": "Ann" })];

        let err = collect_users(documents).expect_err("missing _id");

        assert!(matches!(err, UserRepositoryError::Query { .. }));
    }
}
