//! gRPC server helpers
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig};
//! use rpc::tasks::task_service_server::{TaskServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env_with_default_port(50051)?;
//! let (health_reporter, health_service) = GrpcServer::health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(TaskServiceServer::new(my_impl))
//!     .serve(config.socket_addr()?)
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::GrpcServer;
pub use config::ServerConfig;
