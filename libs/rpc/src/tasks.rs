//! `todo.TaskService` messages and stubs.

/// A task as returned by the task service.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct Task {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub user_id: String,
    #[prost(bool, tag = "5")]
    pub completed: bool,
    /// Opaque date-time string, RFC 3339 by convention
    #[prost(string, tag = "6")]
    pub due_date: String,
    #[prost(string, tag = "7")]
    pub created_at: String,
    #[prost(string, tag = "8")]
    pub updated_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CreateTaskRequest {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, tag = "3")]
    pub user_id: String,
    #[prost(string, tag = "4")]
    pub due_date: String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct GetTaskRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

/// Full replacement of the mutable task fields.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UpdateTaskRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(bool, tag = "4")]
    pub completed: bool,
    #[prost(string, tag = "5")]
    pub due_date: String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct DeleteTaskRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

/// An empty `user_id` lists every owner; an unset `completed` matches both states.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ListTasksRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(bool, optional, tag = "2")]
    pub completed: Option<bool>,
    #[prost(int32, tag = "3")]
    pub page: i32,
    #[prost(int32, tag = "4")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ListTasksResponse {
    #[prost(message, repeated, tag = "1")]
    pub tasks: Vec<Task>,
    /// Size of the full filtered set, independent of the page window
    #[prost(int64, tag = "2")]
    pub total: i64,
}

include!(concat!(env!("OUT_DIR"), "/todo.TaskService.rs"));
