use std::time::Duration;

use core_config::{AppInfo, ConfigError, Environment, FromEnv, app_info, env_or_default, env_parse_or};
use core_config::server::ServerConfig;
use grpc_client::ChannelConfig;

/// Seconds a backend call may take before the request fails with 504
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where each domain backend listens.
///
/// Bare `host:port` values are dialed over plain HTTP/2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceAddrs {
    pub tasks: String,
    pub users: String,
    pub notifications: String,
    pub analytics: String,
}

impl FromEnv for ServiceAddrs {
    /// - TASK_SERVICE_ADDR: defaults to localhost:50051
    /// - USER_SERVICE_ADDR: defaults to localhost:50052
    /// - NOTIFICATION_SERVICE_ADDR: defaults to localhost:50053
    /// - ANALYTICS_SERVICE_ADDR: defaults to localhost:50054
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            tasks: env_or_default("TASK_SERVICE_ADDR", "localhost:50051"),
            users: env_or_default("USER_SERVICE_ADDR", "localhost:50052"),
            notifications: env_or_default("NOTIFICATION_SERVICE_ADDR", "localhost:50053"),
            analytics: env_or_default("ANALYTICS_SERVICE_ADDR", "localhost:50054"),
        })
    }
}

/// Gateway configuration
/// Composes shared config components from `core_config`
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub services: ServiceAddrs,
    pub channel: ChannelConfig,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let services = ServiceAddrs::from_env()?;
        let channel = ChannelConfig::from_env()?;
        let timeout_secs =
            env_parse_or("GATEWAY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "GATEWAY_REQUEST_TIMEOUT_SECS".to_string(),
                details: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            services,
            channel,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
