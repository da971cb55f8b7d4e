//! Server infrastructure: router assembly, liveness, graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let router = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use core_config::shutdown_signal;
