//! Service client registry.
//!
//! One lazily connected channel per backend, built once at startup. A backend
//! whose address cannot be turned into an endpoint is left out; only its
//! routes answer 503.

use grpc_client::{ChannelConfig, ConfigurableClient, configure_client, create_channel_lazy_with_config};
use rpc::analytics::analytics_service_client::AnalyticsServiceClient;
use rpc::notifications::notification_service_client::NotificationServiceClient;
use rpc::tasks::task_service_client::TaskServiceClient;
use rpc::users::user_service_client::UserServiceClient;
use tonic::transport::Channel;
use tracing::{info, warn};

use crate::config::ServiceAddrs;
use crate::error::GatewayError;

pub const TASKS: &str = "tasks";
pub const USERS: &str = "users";
pub const NOTIFICATIONS: &str = "notifications";
pub const ANALYTICS: &str = "analytics";

/// Clients are cheap to clone; clones share the underlying HTTP/2 connection.
#[derive(Clone, Default)]
pub struct ServiceClients {
    tasks: Option<TaskServiceClient<Channel>>,
    users: Option<UserServiceClient<Channel>>,
    notifications: Option<NotificationServiceClient<Channel>>,
    analytics: Option<AnalyticsServiceClient<Channel>>,
}

fn resolve<T>(
    service: &'static str,
    addr: &str,
    channel: &ChannelConfig,
    build: fn(Channel) -> T,
) -> Option<T>
where
    T: ConfigurableClient,
{
    match create_channel_lazy_with_config(addr, channel) {
        Ok(channel) => {
            info!(service, addr, "backend client ready (connects on first request)");
            Some(configure_client(build(channel)))
        }
        Err(e) => {
            warn!(service, addr, error = %e, "backend client unavailable; its routes will answer 503");
            None
        }
    }
}

impl ServiceClients {
    /// Never dials; a backend that is down at startup is retried on each call.
    pub fn connect_lazy(addrs: &ServiceAddrs, channel: &ChannelConfig) -> Self {
        Self {
            tasks: resolve(TASKS, &addrs.tasks, channel, TaskServiceClient::new),
            users: resolve(USERS, &addrs.users, channel, UserServiceClient::new),
            notifications: resolve(
                NOTIFICATIONS,
                &addrs.notifications,
                channel,
                NotificationServiceClient::new,
            ),
            analytics: resolve(
                ANALYTICS,
                &addrs.analytics,
                channel,
                AnalyticsServiceClient::new,
            ),
        }
    }

    pub fn tasks(&self) -> Result<TaskServiceClient<Channel>, GatewayError> {
        self.tasks.clone().ok_or(GatewayError::Unconfigured(TASKS))
    }

    pub fn users(&self) -> Result<UserServiceClient<Channel>, GatewayError> {
        self.users.clone().ok_or(GatewayError::Unconfigured(USERS))
    }

    pub fn notifications(&self) -> Result<NotificationServiceClient<Channel>, GatewayError> {
        self.notifications
            .clone()
            .ok_or(GatewayError::Unconfigured(NOTIFICATIONS))
    }

    pub fn analytics(&self) -> Result<AnalyticsServiceClient<Channel>, GatewayError> {
        self.analytics
            .clone()
            .ok_or(GatewayError::Unconfigured(ANALYTICS))
    }
}
