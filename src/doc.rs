//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the
//! `/users` resource, the health probes, and the shared error envelope.
//! Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User, UserDraft, UserId, UserSummary};
use crate::inbound::http::users::{CreateUserBody, UpdateUserBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "CRUD and count operations over the user registry."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::count_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::get_user_by_name,
        crate::inbound::http::users::get_user_by_mail,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserId,
        UserSummary,
        UserDraft,
        CreateUserBody,
        UpdateUserBody,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "User registry resource"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
