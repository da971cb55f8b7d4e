//! # Axum Helpers
//!
//! Building blocks for the HTTP gateway.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly, liveness route, graceful shutdown
//! - **[`http`]**: the gateway CORS policy
//! - **[`errors`]**: `AppError` and the JSON error body with error codes
//! - **[`extractors`]**: JSON body, query string and ObjectId path extractors that reject with 400
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new()).merge(health_router(app_info!()));
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{ApiJson, ApiQuery, ObjectIdPath};
pub use http::create_gateway_cors_layer;
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
