use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while building channels or servers
#[derive(Error, Debug)]
pub enum GrpcError {
  /// The address could not be turned into an endpoint
  #[error("Invalid URI '{uri}': {source}")]
  InvalidUri {
    uri: String,
    #[source]
    source: tonic::transport::Error,
  },

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::InvalidUri { .. } | GrpcError::InvalidConfig(_) => {
        tonic::Status::invalid_argument(err.to_string())
      }
    }
  }
}
