use core_config::{ConfigError, FromEnv, env_parse_or};
use std::time::Duration;
use tonic::transport::Endpoint;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_KEEP_ALIVE_SECS: u64 = 30;

/// Transport settings shared by every backend channel the gateway opens.
///
/// Request deadlines are not set here; callers bound each call themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
  pub connect_timeout: Duration,
  /// HTTP/2 PING interval. `None` turns keep-alive off.
  pub keep_alive: Option<Duration>,
  pub tcp_nodelay: bool,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
      keep_alive: Some(Duration::from_secs(DEFAULT_KEEP_ALIVE_SECS)),
      tcp_nodelay: true,
    }
  }
}

impl FromEnv for ChannelConfig {
  /// - GRPC_CONNECT_TIMEOUT_SECS: defaults to 5, must be at least 1
  /// - GRPC_KEEP_ALIVE_SECS: defaults to 30, 0 disables keep-alive
  fn from_env() -> Result<Self, ConfigError> {
    let connect_secs = env_parse_or("GRPC_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;
    if connect_secs == 0 {
      return Err(ConfigError::InvalidValue {
        key: "GRPC_CONNECT_TIMEOUT_SECS".to_string(),
        details: "must be at least 1".to_string(),
      });
    }
    let keep_alive_secs = env_parse_or("GRPC_KEEP_ALIVE_SECS", DEFAULT_KEEP_ALIVE_SECS)?;

    Ok(Self {
      connect_timeout: Duration::from_secs(connect_secs),
      keep_alive: (keep_alive_secs > 0).then(|| Duration::from_secs(keep_alive_secs)),
      tcp_nodelay: true,
    })
  }
}

impl ChannelConfig {
  pub(crate) fn apply_to_endpoint(&self, endpoint: Endpoint) -> Endpoint {
    let endpoint = endpoint
      .connect_timeout(self.connect_timeout)
      .tcp_nodelay(self.tcp_nodelay);

    match self.keep_alive {
      Some(interval) => endpoint
        .http2_keep_alive_interval(interval)
        .keep_alive_while_idle(true)
        .tcp_keepalive(Some(interval)),
      None => endpoint,
    }
  }
}
