//! `todo.AnalyticsService` messages and stubs.

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct Event {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
    #[prost(string, tag = "3")]
    pub event_type: String,
    #[prost(string, tag = "4")]
    pub resource_id: String,
    /// Free-form, stored as given
    #[prost(string, tag = "5")]
    pub metadata: String,
    #[prost(string, tag = "6")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct TrackEventRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub event_type: String,
    #[prost(string, tag = "3")]
    pub resource_id: String,
    #[prost(string, tag = "4")]
    pub metadata: String,
}

/// The date range is accepted but not applied.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct GetUserStatsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub start_date: String,
    #[prost(string, tag = "3")]
    pub end_date: String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UserStats {
    #[prost(int64, tag = "1")]
    pub total_tasks: i64,
    #[prost(int64, tag = "2")]
    pub completed_tasks: i64,
    #[prost(int64, tag = "3")]
    pub pending_tasks: i64,
    #[prost(int64, tag = "4")]
    pub overdue_tasks: i64,
}

/// The date range is accepted but not applied.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct GetTaskStatsRequest {
    #[prost(string, tag = "1")]
    pub start_date: String,
    #[prost(string, tag = "2")]
    pub end_date: String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct TaskStats {
    #[prost(int64, tag = "1")]
    pub total_tasks: i64,
    #[prost(int64, tag = "2")]
    pub completed_tasks: i64,
    #[prost(int64, tag = "3")]
    pub active_users: i64,
}

include!(concat!(env!("OUT_DIR"), "/todo.AnalyticsService.rs"));
