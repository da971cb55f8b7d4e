use database::StoreError;
use thiserror::Error;
use tonic::Status;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type NotificationResult<T> = Result<T, NotificationError>;

impl From<NotificationError> for Status {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::Validation(_) => Status::invalid_argument(err.to_string()),
            NotificationError::Store(e) if e.is_unavailable() => {
                warn!(error = %e, "notification store unavailable");
                Status::unavailable("Notification store unavailable")
            }
            NotificationError::Store(e) => {
                error!(error = %e, "notification store failure");
                Status::internal("Internal error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            Status::from(NotificationError::Validation("message".into())).code(),
            Code::InvalidArgument
        );
        assert_eq!(
            Status::from(NotificationError::Store(StoreError::Unavailable("x".into()))).code(),
            Code::Unavailable
        );
        assert_eq!(
            Status::from(NotificationError::Store(StoreError::Encoding("x".into()))).code(),
            Code::Internal
        );
    }
}
