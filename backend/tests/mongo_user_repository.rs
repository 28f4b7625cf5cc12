//! `MongoUserRepository` against a live MongoDB server.
//!
//! Tests needing a server are ignored by default. Run them with
//! `ROSTER_TEST_MONGO_URI` pointing at a server and `--ignored`; each test
//! writes to a fresh collection.

use std::env;
use std::time::Duration;

use mongodb::bson::oid::ObjectId;
use rstest::rstest;
use serde_json::Number;

use roster_backend::domain::ports::{UserRepository, UserRepositoryError};
use roster_backend::domain::{NewUser, UserId, UserPatch};
use roster_backend::outbound::persistence::{MongoStore, MongoUserRepository, StoreConfig};

const URI_VAR: &str = "ROSTER_TEST_MONGO_URI";

async fn repository() -> Option<MongoUserRepository> {
    let uri = env::var(URI_VAR).ok()?;
    let config = StoreConfig::new(uri)
        .with_database("roster_test")
        .with_collection(format!("users_{}", ObjectId::new().to_hex()))
        .with_server_selection_timeout(Duration::from_secs(5));
    let store = MongoStore::connect(&config).await.expect("connect");
    Some(MongoUserRepository::new(&store))
}

fn ann() -> NewUser {
    NewUser {
        name: "Ann".to_owned(),
        email: "ann@mail.com".to_owned(),
        age: Number::from(25),
    }
}

#[rstest]
#[tokio::test]
#[ignore = "needs a MongoDB server in ROSTER_TEST_MONGO_URI"]
async fn update_returns_the_post_update_document() {
    let Some(repo) = repository().await else {
        return;
    };
    let created = repo.create(ann()).await.expect("create");

    let updated = repo
        .update(created.id(), &UserPatch {
            name: Some("Annie".to_owned()),
            ..UserPatch::default()
        })
        .await
        .expect("update")
        .expect("user exists");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.name(), "Annie");
    assert_eq!(updated.email(), "ann@mail.com");
    assert_eq!(updated.age(), &Number::from(25));
    assert_eq!(repo.list().await.expect("list"), vec![updated]);
}

#[rstest]
#[tokio::test]
#[ignore = "needs a MongoDB server in ROSTER_TEST_MONGO_URI"]
async fn malformed_and_missing_ids_match_nothing() {
    let Some(repo) = repository().await else {
        return;
    };
    let patch = UserPatch {
        name: Some("x".to_owned()),
        ..UserPatch::default()
    };

    for raw in ["not-an-object-id", "665f1c2e9d3b4a0012345678"] {
        let id = UserId::new(raw);
        assert_eq!(repo.update(&id, &patch).await.expect("update"), None);
        assert_eq!(repo.find_by_id(&id).await.expect("find"), None);
        repo.delete(&id).await.expect("delete is a no-op");
    }
}

#[rstest]
#[tokio::test]
#[ignore = "needs a MongoDB server in ROSTER_TEST_MONGO_URI"]
async fn empty_patch_returns_the_stored_document() {
    let Some(repo) = repository().await else {
        return;
    };
    let created = repo.create(ann()).await.expect("create");

    let current = repo
        .update(created.id(), &UserPatch::default())
        .await
        .expect("update");

    assert_eq!(current, Some(created));
}

#[rstest]
#[tokio::test]
async fn unreachable_server_is_reported_as_unavailable() {
    let config = StoreConfig::new("mongodb://127.0.0.1:1")
        .with_server_selection_timeout(Duration::from_millis(200));
    let store = MongoStore::connect(&config).await.expect("client builds");

    let err = MongoUserRepository::new(&store)
        .list()
        .await
        .expect_err("no server");

    assert!(matches!(err, UserRepositoryError::Unavailable { .. }));
}
