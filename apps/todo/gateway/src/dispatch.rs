//! Single-attempt backend calls under the uniform request timeout.

use std::future::Future;
use std::time::Duration;

use tonic::{Response, Status};
use tracing::warn;

use crate::error::GatewayError;

/// Await `call` for at most `timeout`.
///
/// On expiry the call future is dropped, which cancels the in-flight RPC.
pub async fn dispatch<T, F>(
    timeout: Duration,
    service: &'static str,
    call: F,
) -> Result<T, GatewayError>
where
    F: Future<Output = Result<Response<T>, Status>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(response)) => Ok(response.into_inner()),
        Ok(Err(status)) => Err(GatewayError::Backend { service, status }),
        Err(_) => {
            warn!(service, ?timeout, "backend call timed out");
            Err(GatewayError::Timeout { service, timeout })
        }
    }
}
