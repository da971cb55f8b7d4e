use std::time::Duration;

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use tonic::{Code, Status};
use tracing::{error, warn};

/// Failure of a single backend dispatch
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No client could be built for the backend at startup
    #[error("{0} service is not configured")]
    Unconfigured(&'static str),

    #[error("{service} service did not answer within {timeout:?}")]
    Timeout {
        service: &'static str,
        timeout: Duration,
    },

    #[error("{service} service returned {:?}: {}", .status.code(), .status.message())]
    Backend {
        service: &'static str,
        status: Status,
    },
}

impl GatewayError {
    /// Backend missing, unreachable or too slow.
    pub fn is_availability(&self) -> bool {
        match self {
            GatewayError::Unconfigured(_) | GatewayError::Timeout { .. } => true,
            GatewayError::Backend { status, .. } => {
                matches!(status.code(), Code::Unavailable | Code::DeadlineExceeded)
            }
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Unconfigured(service) => {
                AppError::ServiceUnavailable(format!("{service} service unavailable"))
            }
            GatewayError::Timeout { service, .. } => {
                warn!(error = %err, "backend timeout");
                AppError::GatewayTimeout(format!("{service} service timed out"))
            }
            GatewayError::Backend { service, status } => match status.code() {
                Code::InvalidArgument => AppError::BadRequest(status.message().to_string()),
                Code::NotFound => AppError::NotFound(status.message().to_string()),
                Code::Unauthenticated => AppError::Unauthorized(status.message().to_string()),
                Code::Unavailable => {
                    warn!(service, status = %status.message(), "backend unavailable");
                    AppError::ServiceUnavailable(format!("{service} service unavailable"))
                }
                Code::DeadlineExceeded => AppError::GatewayTimeout(format!("{service} service timed out")),
                code => {
                    error!(service, ?code, status = %status.message(), "backend failure");
                    AppError::InternalServerError(format!("{service} service error"))
                }
            },
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
