use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv, app_info, shutdown_signal};
use database::MongoStore;
use database::mongodb::{MongoConfig, connect_from_config};
use domain_users::{JwtConfig, JwtTokenIssuer, User, UserService};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig};
use rpc::users::user_service_server::SERVICE_NAME;
use tonic::transport::Server;
use tracing::info;

use crate::service::UserServiceImpl;

pub const DEFAULT_PORT: u16 = 50052;

/// Run the gRPC server until SIGINT/SIGTERM.
///
/// Fails fast when `JWT_SECRET` is missing or too short.
pub async fn run() -> Result<()> {
    install_color_eyre();
    let environment = Environment::from_env();
    init_tracing(&environment);

    let app = app_info!();
    info!(name = app.name, version = app.version, "starting");

    let jwt = JwtConfig::from_env().wrap_err("Failed to load JWT configuration")?;
    let mongo = MongoConfig::from_env().wrap_err("Failed to load MongoDB configuration")?;
    let client = connect_from_config(&mongo)
        .await
        .wrap_err("Failed to connect to MongoDB")?;
    let db = client.database(mongo.database());

    let service = UserService::new(MongoStore::<User>::new(&db), JwtTokenIssuer::new(&jwt));

    let config = ServerConfig::from_env_with_default_port(DEFAULT_PORT)
        .wrap_err("Failed to load server configuration")?;
    let addr = config.socket_addr()?;

    let (health_reporter, health_service) = GrpcServer::health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&config, SERVICE_NAME);

    Server::builder()
        .add_service(health_service)
        .add_service(UserServiceImpl::new(service).into_server(&config))
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .wrap_err("gRPC server failed")?;

    info!("server stopped");
    Ok(())
}
