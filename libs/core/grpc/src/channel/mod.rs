pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Normalize a backend address into an endpoint URI.
///
/// Service addresses are usually configured as bare `host:port`; those get an
/// `http://` scheme. Addresses that already carry a scheme are kept as-is.
pub fn endpoint_uri(addr: &str) -> String {
  let addr = addr.trim();
  if addr.contains("://") {
    addr.to_string()
  } else {
    format!("http://{addr}")
  }
}

/// Creates a lazy gRPC channel that connects on first request
///
/// Returns immediately without dialing. A backend that is not reachable yet
/// surfaces as `Unavailable` on the calls made through the channel, and the
/// channel reconnects on its own once the backend comes up.
///
/// ## Example
/// ```ignore
/// use grpc_client::create_channel_lazy;
/// use rpc::tasks::task_service_client::TaskServiceClient;
///
/// let channel = create_channel_lazy("localhost:50051")?;
/// let client = TaskServiceClient::new(channel);
/// ```
pub fn create_channel_lazy(addr: impl AsRef<str>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, &ChannelConfig::default())
}

/// Same as [`create_channel_lazy`] with explicit transport settings
pub fn create_channel_lazy_with_config(
  addr: impl AsRef<str>,
  config: &ChannelConfig,
) -> GrpcResult<Channel> {
  let uri = endpoint_uri(addr.as_ref());

  let endpoint = Endpoint::from_shared(uri.clone()).map_err(|source| {
    tracing::error!(target: "grpc_client", addr = %uri, error = ?source, "Invalid URI");
    GrpcError::InvalidUri {
      uri: uri.clone(),
      source,
    }
  })?;

  let endpoint = config.apply_to_endpoint(endpoint);

  tracing::debug!(
    target: "grpc_client",
    addr = %uri,
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}
