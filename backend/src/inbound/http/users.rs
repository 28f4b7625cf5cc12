//! User directory handlers.
//!
//! ```text
//! GET    /users
//! POST   /users        {"name":"Ann","email":"ann@mail.com","age":25}
//! PUT    /users/{id}   {"name":"Annie"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserId, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Body returned by `DELETE /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    /// Always `"User deleted"`.
    #[schema(example = "User deleted")]
    pub message: String,
}

impl DeleteConfirmation {
    /// Fixed confirmation text.
    pub const MESSAGE: &'static str = "User deleted";

    fn new() -> Self {
        Self {
            message: Self::MESSAGE.to_owned(),
        }
    }
}

/// List every stored user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 503, description = "Document store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Store a new user and echo it back with its identifier.
#[utoipa::path(
    post,
    path = "/users",
    request_body = NewUser,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Document store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<NewUser>,
) -> ApiResult<web::Json<User>> {
    let user = state.users_command.create_user(payload.into_inner()).await?;
    info!(user_id = %user.id(), "user created");
    Ok(web::Json(user))
}

/// Replace the supplied fields of one user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "No user with this id", body = Error),
        (status = 503, description = "Document store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPatch>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::from(path.into_inner());
    let user = state.users_command.update_user(&id, &payload).await?;
    info!(user_id = %id, "user updated");
    Ok(web::Json(user))
}

/// Remove one user. Unknown ids still succeed.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User removed or never existed", body = DeleteConfirmation),
        (status = 503, description = "Document store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = UserId::from(path.into_inner());
    state.users_command.delete_user(&id).await?;
    info!(user_id = %id, "user deleted");
    Ok(HttpResponse::Ok().json(DeleteConfirmation::new()))
}

/// Register every user route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
