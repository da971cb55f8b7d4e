use database::DocumentStore;
use domain_notifications::{Notification, NotificationService, conversions};
use grpc_client::server::ServerConfig;
use rpc::notifications::notification_service_server::{
    NotificationService as NotificationRpc, NotificationServiceServer,
};
use rpc::notifications::{
    GetNotificationsRequest, GetNotificationsResponse, Notification as NotificationMessage,
    SendNotificationRequest,
};
use tonic::codec::CompressionEncoding;
use tonic::{Request, Response, Status};

pub struct NotificationServiceImpl<S>
where
    S: DocumentStore<Notification> + 'static,
{
    service: NotificationService<S>,
}

impl<S> NotificationServiceImpl<S>
where
    S: DocumentStore<Notification> + 'static,
{
    pub fn new(service: NotificationService<S>) -> Self {
        Self { service }
    }

    pub fn into_server(self, config: &ServerConfig) -> NotificationServiceServer<Self> {
        let server = NotificationServiceServer::new(self)
            .max_decoding_message_size(config.max_message_size)
            .max_encoding_message_size(config.max_message_size);

        if config.enable_compression {
            server
                .accept_compressed(CompressionEncoding::Zstd)
                .send_compressed(CompressionEncoding::Zstd)
        } else {
            server
        }
    }
}

#[tonic::async_trait]
impl<S> NotificationRpc for NotificationServiceImpl<S>
where
    S: DocumentStore<Notification> + 'static,
{
    async fn send_notification(
        &self,
        request: Request<SendNotificationRequest>,
    ) -> Result<Response<NotificationMessage>, Status> {
        let notification = self
            .service
            .send_notification(request.into_inner().into())
            .await?;
        Ok(Response::new(notification.into()))
    }

    async fn get_notifications(
        &self,
        request: Request<GetNotificationsRequest>,
    ) -> Result<Response<GetNotificationsResponse>, Status> {
        let page = self
            .service
            .get_notifications(request.into_inner().into())
            .await?;
        Ok(Response::new(conversions::list_response(page)))
    }
}
