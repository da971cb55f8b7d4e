use database::StoreError;
use thiserror::Error;
use tonic::Status;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<AnalyticsError> for Status {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::Validation(_) => Status::invalid_argument(err.to_string()),
            AnalyticsError::Store(e) if e.is_unavailable() => {
                warn!(error = %e, "analytics store unavailable");
                Status::unavailable("Analytics store unavailable")
            }
            AnalyticsError::Store(e) => {
                error!(error = %e, "analytics store failure");
                Status::internal("Internal error")
            }
        }
    }
}
