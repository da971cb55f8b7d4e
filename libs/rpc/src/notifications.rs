//! `todo.NotificationService` messages and stubs.

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct Notification {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
    #[prost(string, tag = "3")]
    pub message: String,
    #[prost(bool, tag = "4")]
    pub read: bool,
    #[prost(string, tag = "5")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct SendNotificationRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct GetNotificationsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(bool, tag = "2")]
    pub unread_only: bool,
    #[prost(int32, tag = "3")]
    pub page: i32,
    #[prost(int32, tag = "4")]
    pub limit: i32,
}

/// Newest first.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct GetNotificationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub notifications: Vec<Notification>,
    #[prost(int64, tag = "2")]
    pub total: i64,
}

include!(concat!(env!("OUT_DIR"), "/todo.NotificationService.rs"));
