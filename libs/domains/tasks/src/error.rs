use database::StoreError;
use thiserror::Error;
use tonic::Status;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Invalid task id: {0:?}")]
    InvalidId(String),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(StoreError),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl From<StoreError> for TaskError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidIdentifier(id) => TaskError::InvalidId(id),
            StoreError::NotFound { id, .. } => TaskError::NotFound(id),
            other => TaskError::Store(other),
        }
    }
}

/// Store details stay in the logs; callers only see the category.
impl From<TaskError> for Status {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::InvalidId(_) | TaskError::Validation(_) => {
                Status::invalid_argument(err.to_string())
            }
            TaskError::NotFound(_) => Status::not_found(err.to_string()),
            TaskError::Store(e) if e.is_unavailable() => {
                warn!(error = %e, "task store unavailable");
                Status::unavailable("Task store unavailable")
            }
            TaskError::Store(e) => {
                error!(error = %e, "task store failure");
                Status::internal("Internal error")
            }
        }
    }
}
