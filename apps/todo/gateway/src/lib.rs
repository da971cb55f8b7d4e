//! HTTP gateway for the todo services.
//!
//! Translates REST calls into gRPC calls on the four domain backends.
//!
//! ```text
//! Client
//!   ↓ (HTTP/JSON)
//! Router (api/*)          decode body or query, validate path ids
//!   ↓
//! dispatch                one attempt, uniform timeout
//!   ↓ (gRPC with Zstd compression)
//! tasks | users | notifications | analytics
//! ```
//!
//! Backend failures are remapped to HTTP statuses in [`error`]; store details
//! never reach the caller.

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use tracing::info;

pub mod api;
pub mod clients;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod openapi;
pub mod state;

pub use clients::ServiceClients;
pub use config::{Config, ServiceAddrs};
pub use error::GatewayError;
pub use state::AppState;

use openapi::ApiDoc;

/// Full gateway router: `/api/*`, docs, and the root `/health` route.
pub fn app(state: AppState) -> Router {
    create_router::<ApiDoc>(api::routes(state)).merge(health_router(core_config::app_info!()))
}

/// Run the gateway until SIGINT/SIGTERM.
pub async fn run() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env().wrap_err("Failed to load gateway configuration")?;
    init_tracing(&config.environment);

    info!(
        name = config.app.name,
        version = config.app.version,
        timeout = ?config.request_timeout,
        "starting gateway"
    );

    let clients = ServiceClients::connect_lazy(&config.services, &config.channel);
    let state = AppState::new(clients, config.request_timeout);

    create_app(app(state), &config.server)
        .await
        .wrap_err("HTTP server failed")?;
    Ok(())
}
