//! # gRPC plumbing
//!
//! Shared client and server setup for the todo services:
//!
//! - **Lazy channels**: [`create_channel_lazy`] never dials at construction, so a
//!   backend that is down at startup only fails the calls routed to it.
//! - **Client defaults**: [`configure_client`] applies zstd compression and 8MB
//!   message limits to any generated client implementing [`ConfigurableClient`].
//! - **Server helpers**: [`server::ServerConfig`] and [`server::GrpcServer`] read the
//!   bind address from the environment and register `grpc.health.v1.Health`.
//!
//! ```ignore
//! use grpc_client::{configure_client, create_channel_lazy};
//! use rpc::tasks::task_service_client::TaskServiceClient;
//!
//! let channel = create_channel_lazy("localhost:50051")?;
//! let client = configure_client(TaskServiceClient::new(channel));
//! ```

pub mod channel;
pub mod client;
pub mod error;
pub mod server;

pub use channel::{ChannelConfig, create_channel_lazy, create_channel_lazy_with_config, endpoint_uri};
pub use client::{ConfigurableClient, MAX_MESSAGE_SIZE, configure_client};
pub use error::{GrpcError, GrpcResult};
