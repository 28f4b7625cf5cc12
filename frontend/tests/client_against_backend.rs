//! The HTTP client and view against a real backend on an ephemeral port.
//!
//! The backend runs in-process over the in-memory repository, so these tests
//! need no database.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{HttpServer, web};
use rstest::rstest;

use roster_backend::inbound::http::health::HealthState;
use roster_backend::inbound::http::state::HttpState;
use roster_backend::outbound::persistence::InMemoryUserRepository;
use roster_backend::server::build_app;
use roster_frontend::{ClientError, HttpUsersApi, NewUser, UserListView, UserPatch, UsersApi};

struct RunningBackend {
    base_url: String,
    handle: ServerHandle,
}

impl RunningBackend {
    fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let health = web::Data::new(HealthState::new());
        let state = web::Data::new(HttpState::from_repository(Arc::new(
            InMemoryUserRepository::new(),
        )));
        let server = HttpServer::new(move || build_app(health.clone(), state.clone()))
            .disable_signals()
            .workers(1)
            .listen(listener)?
            .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Ok(Self {
            base_url: format!("http://{addr}"),
            handle,
        })
    }

    fn api(&self) -> HttpUsersApi {
        HttpUsersApi::new(&self.base_url).expect("backend base URL is valid")
    }

    async fn stop(self) {
        self.handle.stop(true).await;
    }
}

#[rstest]
#[actix_web::test]
async fn client_round_trips_every_operation() {
    let backend = RunningBackend::start().expect("backend starts");
    let api = backend.api();

    assert!(api.get_users().await.expect("list").is_empty());

    let created = api
        .add_user(&NewUser {
            name: "Ann".to_owned(),
            email: "ann@mail.com".to_owned(),
            age: 25.into(),
        })
        .await
        .expect("create");
    assert!(!created.id.is_empty());

    let updated = api
        .update_user(&created.id, &UserPatch::rename("Annie"))
        .await
        .expect("update");
    assert_eq!(updated.name, "Annie");
    assert_eq!(updated.email, "ann@mail.com");
    assert_eq!(updated.age.as_u64(), Some(25));
    assert_eq!(api.get_users().await.expect("list"), vec![updated]);

    let first = api.delete_user(&created.id).await.expect("delete");
    let second = api.delete_user(&created.id).await.expect("repeat delete");
    assert_eq!(first.message, "User deleted");
    assert_eq!(first, second);
    assert!(api.get_users().await.expect("list").is_empty());

    backend.stop().await;
}

#[rstest]
#[actix_web::test]
async fn client_surfaces_error_payloads() {
    let backend = RunningBackend::start().expect("backend starts");
    let api = backend.api();

    let err = api
        .update_user("000000000000000000000000", &UserPatch::rename("x"))
        .await
        .expect_err("unknown user");

    assert!(matches!(err, ClientError::Status { status: 404, .. }));
    assert_eq!(err.api_code(), Some("not_found"));

    backend.stop().await;
}

#[rstest]
#[actix_web::test]
async fn view_session_matches_server_state() {
    let backend = RunningBackend::start().expect("backend starts");
    let mut view = UserListView::new(backend.api());

    view.load().await.expect("load");
    view.set_new_name("Ann");
    let ann_id = view.add().await.expect("add").id.clone();
    view.set_new_name("Bob");
    let bob_id = view.add().await.expect("add").id.clone();

    assert!(view.open_editor(&ann_id));
    view.set_edit_name("Annie");
    let saved = view.confirm_edit().await.expect("save");
    assert_eq!(saved.map(|user| user.id), Some(ann_id.clone()));
    view.delete(&bob_id).await.expect("delete");

    let server_side = backend.api().get_users().await.expect("list");
    assert_eq!(view.users(), server_side.as_slice());
    assert_eq!(server_side.len(), 1);
    assert_eq!(server_side.first().map(|u| u.name.as_str()), Some("Annie"));
    assert_eq!(
        server_side.first().map(|u| u.email.as_str()),
        Some("Ann@mail.com")
    );

    backend.stop().await;
}
