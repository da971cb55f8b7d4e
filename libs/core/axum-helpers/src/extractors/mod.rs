//! Extractors that turn every decode failure into a 400 [`AppError`](crate::AppError).

mod json;
mod object_id_path;
mod query;

pub use json::ApiJson;
pub use object_id_path::ObjectIdPath;
pub use query::ApiQuery;
