//! Event tracking and stats routes, forwarded to the analytics service.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    routing::{get, post},
};
use axum_helpers::{ApiJson, ApiQuery, AppError, ErrorResponse};
use rpc::analytics::{
    Event, GetTaskStatsRequest, GetUserStatsRequest, TaskStats, TrackEventRequest, UserStats,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::clients::ANALYTICS;
use crate::dispatch::dispatch;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analytics/events", post(track_event))
        .route("/analytics/users/{id}/stats", get(get_user_stats))
        .route("/analytics/tasks/stats", get(get_task_stats))
        .with_state(state)
}

/// Accepted and forwarded; the backend does not filter by date yet.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct StatsQuery {
    pub start_date: String,
    pub end_date: String,
}

#[utoipa::path(
    post,
    path = "/analytics/events",
    tag = "analytics",
    request_body = TrackEventRequest,
    responses(
        (status = 201, description = "Event recorded", body = Event),
        (status = 400, description = "Missing user_id or event_type", body = ErrorResponse)
    )
)]
pub async fn track_event(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TrackEventRequest>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let mut client = state.clients.analytics()?;
    let event = dispatch(state.request_timeout, ANALYTICS, client.track_event(input)).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    get,
    path = "/analytics/users/{id}/stats",
    tag = "analytics",
    params(("id" = String, Path, description = "Owner id as stored on tasks"), StatsQuery),
    responses(
        (status = 200, description = "Task counts for one owner", body = UserStats),
        (status = 503, description = "Analytics service unavailable", body = ErrorResponse)
    )
)]
pub async fn get_user_stats(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    ApiQuery(query): ApiQuery<StatsQuery>,
) -> Result<Json<UserStats>, AppError> {
    let Path(user_id) = path?;

    let mut client = state.clients.analytics()?;
    let stats = dispatch(
        state.request_timeout,
        ANALYTICS,
        client.get_user_stats(GetUserStatsRequest {
            user_id,
            start_date: query.start_date,
            end_date: query.end_date,
        }),
    )
    .await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/analytics/tasks/stats",
    tag = "analytics",
    params(StatsQuery),
    responses(
        (status = 200, description = "Counts across all tasks", body = TaskStats),
        (status = 503, description = "Analytics service unavailable", body = ErrorResponse)
    )
)]
pub async fn get_task_stats(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StatsQuery>,
) -> Result<Json<TaskStats>, AppError> {
    let mut client = state.clients.analytics()?;
    let stats = dispatch(
        state.request_timeout,
        ANALYTICS,
        client.get_task_stats(GetTaskStatsRequest {
            start_date: query.start_date,
            end_date: query.end_date,
        }),
    )
    .await?;
    Ok(Json(stats))
}
