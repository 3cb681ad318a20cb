//! Users API handlers.
//!
//! ```text
//! GET    /users             List user summaries
//! GET    /users/count       Count stored users
//! GET    /users/{id}        Fetch a user by id
//! GET    /users/name/{name} Fetch a user by name
//! GET    /users/mail/{mail} Fetch a user by mail
//! POST   /users             Create a user
//! PUT    /users/{id}        Rename a user
//! DELETE /users/{id}        Delete a user
//! ```
//!
//! Each handler is a single linear pipeline: repository call, absence
//! check, status mapping. No state is shared between requests beyond the
//! injected repository handle.

use actix_web::{HttpResponse, delete, get, http::header, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::{
    Error, User, UserDraft, UserId, UserPersistenceError, UserSummary,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for `POST /users`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserBody {
    /// Display name.
    pub name: String,
    /// Mail address.
    pub mail: String,
}

impl From<CreateUserBody> for UserDraft {
    fn from(body: CreateUserBody) -> Self {
        Self {
            name: body.name,
            mail: body.mail,
        }
    }
}

/// Request payload for `PUT /users/{id}`.
///
/// Only `name` is honoured; any other field the client sends (including
/// `mail` or `id`) is ignored and the stored values are left untouched.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserBody {
    /// Replacement display name.
    pub name: String,
}

/// Map repository failures outside the create path to domain errors.
fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} does not exist"))
}

/// List all users as summaries.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "User summaries, possibly empty", body = [UserSummary]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Repository unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserSummary>>> {
    info!("listing users");
    let users = state.users.list().await.map_err(map_persistence_error)?;
    Ok(web::Json(users))
}

/// Count the stored users.
#[utoipa::path(
    get,
    path = "/users/count",
    responses(
        (status = 200, description = "Number of stored users", body = u64),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Repository unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "countUsers"
)]
#[get("/count")]
pub async fn count_users(state: web::Data<HttpState>) -> ApiResult<web::Json<u64>> {
    info!("counting users");
    let count = state.users.count().await.map_err(map_persistence_error)?;
    Ok(web::Json(count))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    info!(%id, "fetching user by id");
    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| user_not_found(id))?;
    Ok(web::Json(user))
}

/// Fetch a user by name.
#[utoipa::path(
    get,
    path = "/users/name/{name}",
    params(("name" = String, Path, description = "Display name")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserByName"
)]
#[get("/name/{name}")]
pub async fn get_user_by_name(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let name = path.into_inner();
    info!(name, "fetching user by name");
    let user = state
        .users
        .find_by_name(&name)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found(format!("no user named {name}")))?;
    Ok(web::Json(user))
}

/// Fetch a user by mail address.
#[utoipa::path(
    get,
    path = "/users/mail/{mail}",
    params(("mail" = String, Path, description = "Mail address")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserByMail"
)]
#[get("/mail/{mail}")]
pub async fn get_user_by_mail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let mail = path.into_inner();
    info!(mail, "fetching user by mail");
    let user = state
        .users
        .find_by_mail(&mail)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found(format!("no user with mail {mail}")))?;
    Ok(web::Json(user))
}

/// Create a user.
///
/// A missing or undecodable payload is a client error (422), distinct
/// from a repository failure during the insert (400). The body is taken
/// as a `Result` so extraction failures reach this handler instead of
/// Actix's default rejection.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User created", body = User,
            headers(("Location" = String, description = "URL of the created user"))),
        (status = 400, description = "User could not be persisted", body = Error),
        (status = 422, description = "Payload absent or undecodable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: Result<web::Json<CreateUserBody>, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    let body = body.map_err(|err| {
        warn!(error = %err, "rejecting create request without usable payload");
        Error::unprocessable("user was invalidly set on request")
    })?;

    let draft = UserDraft::from(body.into_inner());
    info!(name = draft.name, "creating user");
    let user = state.users.create(&draft).await.map_err(|err| {
        warn!(error = %err, "user insert failed");
        Error::invalid_request("user could not be persisted")
    })?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/users/{}", user.id)))
        .json(user))
}

/// Rename a user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Json<UpdateUserBody>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    info!(%id, "updating user");
    let user = state
        .users
        .rename(id, &body.name)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| user_not_found(id))?;
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    info!(%id, "deleting user");
    let removed = state
        .users
        .delete(id)
        .await
        .map_err(map_persistence_error)?;
    if !removed {
        return Err(user_not_found(id));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Register the `/users` resource on a scope.
///
/// `count` must come before the `{id}` matcher so the literal segment
/// wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(list_users)
            .service(create_user)
            .service(count_users)
            .service(get_user_by_name)
            .service(get_user_by_mail)
            .service(get_user)
            .service(update_user)
            .service(delete_user),
    );
}
