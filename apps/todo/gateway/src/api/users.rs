//! User and login routes, forwarded to the user service.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_helpers::{ApiJson, AppError, ErrorResponse, ObjectIdPath};
use rpc::DeleteResponse;
use rpc::users::{
    AuthRequest, AuthResponse, CreateUserRequest, DeleteUserRequest, GetUserRequest,
    UpdateUserRequest, User,
};
use tracing::info;

use crate::clients::USERS;
use crate::dispatch::dispatch;
use crate::error::GatewayError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/",
            get(super::missing_id).put(super::missing_id).delete(super::missing_id),
        )
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/auth", post(authenticate))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created; the password is never returned", body = User),
        (status = 400, description = "Missing username, email or password", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let mut client = state.clients.users()?;
    let user = dispatch(state.request_timeout, USERS, client.create_user(input)).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (24 hex characters)")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<User>, AppError> {
    let mut client = state.clients.users()?;
    let user = dispatch(state.request_timeout, USERS, client.get_user(GetUserRequest { id })).await?;
    Ok(Json(user))
}

/// An empty or missing `password` keeps the current one.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (24 hex characters)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User after the update", body = User),
        (status = 400, description = "Malformed id or invalid input", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ObjectIdPath(id): ObjectIdPath,
    ApiJson(mut input): ApiJson<UpdateUserRequest>,
) -> Result<Json<User>, AppError> {
    input.id = id;

    let mut client = state.clients.users()?;
    let user = dispatch(state.request_timeout, USERS, client.update_user(input)).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (24 hex characters)")),
    responses(
        (status = 200, description = "Deleted, or already absent", body = DeleteResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut client = state.clients.users()?;
    let response = dispatch(
        state.request_timeout,
        USERS,
        client.delete_user(DeleteUserRequest { id }),
    )
    .await?;
    Ok(Json(response))
}

/// Exchange email and password for a token.
///
/// Every failure other than an unavailable backend is reported as 401, so the
/// response does not reveal whether the email is registered.
#[utoipa::path(
    post,
    path = "/auth",
    tag = "users",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Token and the authenticated user", body = AuthResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 503, description = "User service unavailable", body = ErrorResponse)
    )
)]
pub async fn authenticate(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AuthRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let mut client = state.clients.users()?;
    match dispatch(state.request_timeout, USERS, client.authenticate_user(input)).await {
        Ok(response) => Ok(Json(response)),
        Err(err) if err.is_availability() => Err(err.into()),
        Err(err) => {
            if let GatewayError::Backend { status, .. } = &err {
                info!(code = ?status.code(), "login rejected");
            }
            Err(AppError::Unauthorized("Invalid email or password".to_string()))
        }
    }
}
