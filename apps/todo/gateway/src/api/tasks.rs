//! Task routes, forwarded to the task service.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use axum_helpers::{ApiJson, ApiQuery, AppError, ErrorResponse, ObjectIdPath};
use rpc::DeleteResponse;
use rpc::tasks::{
    CreateTaskRequest, DeleteTaskRequest, GetTaskRequest, ListTasksRequest, ListTasksResponse, Task,
    UpdateTaskRequest,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::clients::TASKS;
use crate::dispatch::dispatch;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/",
            get(super::missing_id).put(super::missing_id).delete(super::missing_id),
        )
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(state)
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct ListTasksQuery {
    /// Owner filter; empty lists every owner
    pub user_id: String,
    /// Absent lists both open and completed tasks
    pub completed: Option<bool>,
    /// Zero-based page number
    pub page: Option<i64>,
    /// Page size, at most 100 (default 20)
    pub limit: Option<i64>,
}

impl From<ListTasksQuery> for ListTasksRequest {
    fn from(query: ListTasksQuery) -> Self {
        Self {
            user_id: query.user_id,
            completed: query.completed,
            page: super::page(query.page),
            limit: super::limit(query.limit),
        }
    }
}

#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 503, description = "Task service unavailable", body = ErrorResponse)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let mut client = state.clients.tasks()?;
    let task = dispatch(state.request_timeout, TASKS, client.create_task(input)).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task id (24 hex characters)")),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<Task>, AppError> {
    let mut client = state.clients.tasks()?;
    let task = dispatch(state.request_timeout, TASKS, client.get_task(GetTaskRequest { id })).await?;
    Ok(Json(task))
}

/// The path id wins over any `id` in the body.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task id (24 hex characters)")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task after the update", body = Task),
        (status = 400, description = "Malformed id or invalid input", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    ObjectIdPath(id): ObjectIdPath,
    ApiJson(mut input): ApiJson<UpdateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    input.id = id;

    let mut client = state.clients.tasks()?;
    let task = dispatch(state.request_timeout, TASKS, client.update_task(input)).await?;
    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task id (24 hex characters)")),
    responses(
        (status = 200, description = "Deleted, or already absent", body = DeleteResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut client = state.clients.tasks()?;
    let response = dispatch(
        state.request_timeout,
        TASKS,
        client.delete_task(DeleteTaskRequest { id }),
    )
    .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    params(ListTasksQuery),
    responses(
        (status = 200, description = "One page plus the filtered total", body = ListTasksResponse),
        (status = 400, description = "Malformed query", body = ErrorResponse)
    )
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListTasksQuery>,
) -> Result<Json<ListTasksResponse>, AppError> {
    let mut client = state.clients.tasks()?;
    let response = dispatch(
        state.request_timeout,
        TASKS,
        client.list_tasks(ListTasksRequest::from(query)),
    )
    .await?;
    Ok(Json(response))
}
