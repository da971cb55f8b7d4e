//! Server configuration loaded from environment variables.

use crate::error::GrpcError;
use core_config::{ConfigError, env_first, env_or_default, env_parse_or};
use std::net::SocketAddr;

/// Bind settings for a gRPC service binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    pub port: u16,
    /// Negotiate zstd with clients (default: true)
    pub enable_compression: bool,
    pub max_message_size: usize,
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port,
            enable_compression: true,
            max_message_size: crate::MAX_MESSAGE_SIZE,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `GRPC_HOST` (default: 0.0.0.0)
    /// - `GRPC_PORT`, then `PORT`, then `default_port`
    /// - `GRPC_COMPRESSION` (default: true; "false" or "0" disables)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 8MB)
    pub fn from_env_with_default_port(default_port: u16) -> Result<Self, ConfigError> {
        let host = env_or_default("GRPC_HOST", "0.0.0.0");
        let port = match env_first(&["GRPC_PORT", "PORT"]) {
            Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::ParseError {
                    key: "GRPC_PORT".to_string(),
                    details: e.to_string(),
                }
            })?,
            None => default_port,
        };
        let enable_compression = std::env::var("GRPC_COMPRESSION")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        let max_message_size = env_parse_or("GRPC_MAX_MESSAGE_SIZE", crate::MAX_MESSAGE_SIZE)?;

        Ok(Self {
            host,
            port,
            enable_compression,
            max_message_size,
        })
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, GrpcError> {
        self.addr_string()
            .parse()
            .map_err(|e| GrpcError::InvalidConfig(format!("bind address {}: {e}", self.addr_string())))
    }

    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 5] = [
        "GRPC_HOST",
        "GRPC_PORT",
        "PORT",
        "GRPC_COMPRESSION",
        "GRPC_MAX_MESSAGE_SIZE",
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter().map(|key| (*key, None)).collect()
    }

    #[test]
    fn test_defaults_use_service_port() {
        temp_env::with_vars(unset_all(), || {
            let config = ServerConfig::from_env_with_default_port(50053).unwrap();
            assert_eq!(config, ServerConfig::new(50053));
            assert_eq!(config.addr_string(), "0.0.0.0:50053");
        });
    }

    #[test]
    fn test_port_falls_back_to_port_var() {
        let mut vars = unset_all();
        vars.push(("PORT", Some("6000")));
        temp_env::with_vars(vars, || {
            let config = ServerConfig::from_env_with_default_port(50051).unwrap();
            assert_eq!(config.port, 6000);
        });
    }

    #[test]
    fn test_grpc_port_wins_over_port() {
        temp_env::with_vars([("GRPC_PORT", Some("7000")), ("PORT", Some("6000"))], || {
            let config = ServerConfig::from_env_with_default_port(50051).unwrap();
            assert_eq!(config.port, 7000);
        });
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_vars([("GRPC_PORT", Some("grpc")), ("PORT", None)], || {
            let err = ServerConfig::from_env_with_default_port(50051).unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }

    #[test]
    fn test_compression_toggle() {
        temp_env::with_var("GRPC_COMPRESSION", Some("false"), || {
            let config = ServerConfig::from_env_with_default_port(50051).unwrap();
            assert!(!config.enable_compression);
        });
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::new(50052).with_host("127.0.0.1");
        assert_eq!(config.socket_addr().unwrap().port(), 50052);

        let bad = ServerConfig::new(50052).with_host("not a host");
        assert!(matches!(bad.socket_addr(), Err(GrpcError::InvalidConfig(_))));
    }
}
