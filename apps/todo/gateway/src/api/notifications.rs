//! Notification routes, forwarded to the notification service.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{ApiJson, ApiQuery, AppError, ErrorResponse};
use rpc::notifications::{
    GetNotificationsRequest, GetNotificationsResponse, Notification, SendNotificationRequest,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::clients::NOTIFICATIONS;
use crate::dispatch::dispatch;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/notifications",
            get(get_notifications).post(send_notification),
        )
        .with_state(state)
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct NotificationsQuery {
    pub user_id: String,
    /// Only notifications not yet marked read
    pub unread_only: bool,
    /// Zero-based page number
    pub page: Option<i64>,
    /// Page size, at most 100 (default 20)
    pub limit: Option<i64>,
}

impl From<NotificationsQuery> for GetNotificationsRequest {
    fn from(query: NotificationsQuery) -> Self {
        Self {
            user_id: query.user_id,
            unread_only: query.unread_only,
            page: super::page(query.page),
            limit: super::limit(query.limit),
        }
    }
}

#[utoipa::path(
    post,
    path = "/notifications",
    tag = "notifications",
    request_body = SendNotificationRequest,
    responses(
        (status = 201, description = "Notification stored unread", body = Notification),
        (status = 400, description = "Missing user_id or message", body = ErrorResponse)
    )
)]
pub async fn send_notification(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SendNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let mut client = state.clients.notifications()?;
    let notification = dispatch(
        state.request_timeout,
        NOTIFICATIONS,
        client.send_notification(input),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// Newest first.
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    params(NotificationsQuery),
    responses(
        (status = 200, description = "One page plus the filtered total", body = GetNotificationsResponse),
        (status = 400, description = "Malformed query", body = ErrorResponse)
    )
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<NotificationsQuery>,
) -> Result<Json<GetNotificationsResponse>, AppError> {
    let mut client = state.clients.notifications()?;
    let response = dispatch(
        state.request_timeout,
        NOTIFICATIONS,
        client.get_notifications(GetNotificationsRequest::from(query)),
    )
    .await?;
    Ok(Json(response))
}
