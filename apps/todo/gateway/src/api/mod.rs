use axum::Router;
use axum_helpers::AppError;

use crate::state::AppState;

pub mod analytics;
pub mod notifications;
pub mod tasks;
pub mod users;

/// Page size when the query omits `limit`
pub const DEFAULT_LIMIT: i32 = 20;
/// Largest page a list route will ask a backend for
pub const MAX_LIMIT: i32 = 100;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `create_router`.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .merge(tasks::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(notifications::router(state.clone()))
        .merge(analytics::router(state))
}

/// Zero-based page; negative values clamp to 0.
pub(crate) fn page(raw: Option<i64>) -> i32 {
    i32::try_from(raw.unwrap_or(0).max(0)).unwrap_or(i32::MAX)
}

/// Page size in `0..=MAX_LIMIT`; `0` asks for the total only.
pub(crate) fn limit(raw: Option<i64>) -> i32 {
    raw.map_or(DEFAULT_LIMIT, |limit| {
        i32::try_from(limit.clamp(0, i64::from(MAX_LIMIT))).unwrap_or(MAX_LIMIT)
    })
}

/// Handler for `/{resource}/` with the identifier left out.
pub(crate) async fn missing_id() -> AppError {
    AppError::InvalidObjectId(String::new())
}
