use database::{DocumentStore, ReadStore};
use domain_analytics::{AnalyticsService, Event, StatsRange};
use domain_tasks::Task;
use grpc_client::server::ServerConfig;
use rpc::analytics::analytics_service_server::{
    AnalyticsService as AnalyticsRpc, AnalyticsServiceServer,
};
use rpc::analytics::{
    Event as EventMessage, GetTaskStatsRequest, GetUserStatsRequest, TaskStats, TrackEventRequest,
    UserStats,
};
use tonic::codec::CompressionEncoding;
use tonic::{Request, Response, Status};

pub struct AnalyticsServiceImpl<E, T>
where
    E: DocumentStore<Event> + 'static,
    T: ReadStore<Task> + 'static,
{
    service: AnalyticsService<E, T>,
}

impl<E, T> AnalyticsServiceImpl<E, T>
where
    E: DocumentStore<Event> + 'static,
    T: ReadStore<Task> + 'static,
{
    pub fn new(service: AnalyticsService<E, T>) -> Self {
        Self { service }
    }

    pub fn into_server(self, config: &ServerConfig) -> AnalyticsServiceServer<Self> {
        let server = AnalyticsServiceServer::new(self)
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
impl<E, T> AnalyticsRpc for AnalyticsServiceImpl<E, T>
where
    E: DocumentStore<Event> + 'static,
    T: ReadStore<Task> + 'static,
{
    async fn track_event(
        &self,
        request: Request<TrackEventRequest>,
    ) -> Result<Response<EventMessage>, Status> {
        let event = self.service.track_event(request.into_inner().into()).await?;
        Ok(Response::new(event.into()))
    }

    async fn get_user_stats(
        &self,
        request: Request<GetUserStatsRequest>,
    ) -> Result<Response<UserStats>, Status> {
        let req = request.into_inner();
        let range = StatsRange::from(&req);

        let stats = self.service.get_user_stats(&req.user_id, range).await?;
        Ok(Response::new(stats.into()))
    }

    async fn get_task_stats(
        &self,
        request: Request<GetTaskStatsRequest>,
    ) -> Result<Response<TaskStats>, Status> {
        let stats = self.service.get_task_stats(request.into_inner().into()).await?;
        Ok(Response::new(stats.into()))
    }
}
