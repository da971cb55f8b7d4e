use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv, app_info, shutdown_signal};
use database::MongoStore;
use database::mongodb::{MongoConfig, connect_from_config};
use domain_notifications::{Notification, NotificationService};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig};
use rpc::notifications::notification_service_server::SERVICE_NAME;
use tonic::transport::Server;
use tracing::info;

use crate::service::NotificationServiceImpl;

pub const DEFAULT_PORT: u16 = 50053;

pub async fn run() -> Result<()> {
    install_color_eyre();
    let environment = Environment::from_env();
    init_tracing(&environment);

    let app = app_info!();
    info!(name = app.name, version = app.version, "starting");

    let mongo = MongoConfig::from_env().wrap_err("Failed to load MongoDB configuration")?;
    let client = connect_from_config(&mongo)
        .await
        .wrap_err("Failed to connect to MongoDB")?;
    let db = client.database(mongo.database());

    let service = NotificationService::new(MongoStore::<Notification>::new(&db));

    let config = ServerConfig::from_env_with_default_port(DEFAULT_PORT)
        .wrap_err("Failed to load server configuration")?;
    let addr = config.socket_addr()?;

    let (health_reporter, health_service) = GrpcServer::health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&config, SERVICE_NAME);

    Server::builder()
        .add_service(health_service)
        .add_service(NotificationServiceImpl::new(service).into_server(&config))
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .wrap_err("gRPC server failed")?;

    info!("server stopped");
    Ok(())
}
