//! ObjectId path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use bson::oid::ObjectId;

/// Single path parameter that must be a 24 character hex ObjectId.
///
/// Malformed identifiers are rejected with 400 before any backend is called.
/// The wrapped value is the canonical lowercase hex form.
///
/// ```ignore
/// async fn get_task(ObjectIdPath(id): ObjectIdPath) -> String {
///     id
/// }
///
/// let app = Router::new().route("/tasks/{id}", get(get_task));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdPath(pub String);

impl ObjectIdPath {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        ObjectId::parse_str(raw)
            .map(|oid| ObjectIdPath(oid.to_hex()))
            .map_err(|_| AppError::InvalidObjectId(raw.to_string()))
    }
}

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state).await?;
        Self::parse(&id)
    }
}
