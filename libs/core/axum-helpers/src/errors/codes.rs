//! Error codes carried in every error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidObjectId;
//! assert_eq!(code.as_str(), "INVALID_OBJECT_ID");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Request was malformed in a way not covered by a more specific code
    BadRequest,

    /// Path identifier is not a 24 character hex ObjectId
    InvalidObjectId,

    /// JSON body could not be decoded
    JsonExtraction,

    /// Query string could not be decoded
    QueryExtraction,

    NotFound,

    /// Credentials missing or rejected
    Unauthorized,

    // Upstream errors (1500s)
    InternalError,

    /// Backend not configured or not reachable
    ServiceUnavailable,

    /// Backend did not answer within the request timeout
    GatewayTimeout,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidObjectId => "INVALID_OBJECT_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::QueryExtraction => "QUERY_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::GatewayTimeout => "GATEWAY_TIMEOUT",
        }
    }

    /// Integer code for logs and dashboards.
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1001,
            Self::InvalidObjectId => 1002,
            Self::JsonExtraction => 1003,
            Self::QueryExtraction => 1004,
            Self::NotFound => 1005,
            Self::Unauthorized => 1006,

            Self::InternalError => 1501,
            Self::ServiceUnavailable => 1502,
            Self::GatewayTimeout => 1503,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Invalid request",
            Self::InvalidObjectId => "Invalid identifier format",
            Self::JsonExtraction => "Invalid request payload",
            Self::QueryExtraction => "Invalid query parameters",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "Authentication failed",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::GatewayTimeout => "Upstream service timed out",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 9] = [
        ErrorCode::BadRequest,
        ErrorCode::InvalidObjectId,
        ErrorCode::JsonExtraction,
        ErrorCode::QueryExtraction,
        ErrorCode::NotFound,
        ErrorCode::Unauthorized,
        ErrorCode::InternalError,
        ErrorCode::ServiceUnavailable,
        ErrorCode::GatewayTimeout,
    ];

    #[test]
    fn test_serde_matches_as_str() {
        for code in ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<i32> = ALL.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }
}
