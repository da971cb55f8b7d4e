use database::StoreError;
use thiserror::Error;
use tonic::Status;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid user id: {0:?}")]
    InvalidId(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error(transparent)]
    Store(StoreError),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidIdentifier(id) => UserError::InvalidId(id),
            StoreError::NotFound { id, .. } => UserError::NotFound(id),
            other => UserError::Store(other),
        }
    }
}

impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidId(_) | UserError::Validation(_) => {
                Status::invalid_argument(err.to_string())
            }
            UserError::NotFound(_) => Status::not_found(err.to_string()),
            UserError::InvalidCredentials => Status::unauthenticated(err.to_string()),
            UserError::Store(e) if e.is_unavailable() => {
                warn!(error = %e, "user store unavailable");
                Status::unavailable("User store unavailable")
            }
            other => {
                error!(error = %other, "user service failure");
                Status::internal("Internal error")
            }
        }
    }
}
