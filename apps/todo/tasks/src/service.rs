use database::DocumentStore;
use domain_tasks::{Task, TaskService, conversions};
use grpc_client::server::ServerConfig;
use rpc::DeleteResponse;
use rpc::tasks::task_service_server::{TaskService as TaskRpc, TaskServiceServer};
use rpc::tasks::{
    CreateTaskRequest, DeleteTaskRequest, GetTaskRequest, ListTasksRequest, ListTasksResponse,
    Task as TaskMessage, UpdateTaskRequest,
};
use tonic::codec::CompressionEncoding;
use tonic::{Request, Response, Status};
use tracing::info;

pub struct TaskServiceImpl<S>
where
    S: DocumentStore<Task> + 'static,
{
    service: TaskService<S>,
}

impl<S> TaskServiceImpl<S>
where
    S: DocumentStore<Task> + 'static,
{
    pub fn new(service: TaskService<S>) -> Self {
        Self { service }
    }

    /// Wrap in the generated server with the configured compression and size limits.
    pub fn into_server(self, config: &ServerConfig) -> TaskServiceServer<Self> {
        let server = TaskServiceServer::new(self)
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
impl<S> TaskRpc for TaskServiceImpl<S>
where
    S: DocumentStore<Task> + 'static,
{
    async fn create_task(
        &self,
        request: Request<CreateTaskRequest>,
    ) -> Result<Response<TaskMessage>, Status> {
        let task = self.service.create_task(request.into_inner().into()).await?;
        Ok(Response::new(task.into()))
    }

    async fn get_task(&self, request: Request<GetTaskRequest>) -> Result<Response<TaskMessage>, Status> {
        let task = self.service.get_task(&request.into_inner().id).await?;
        Ok(Response::new(task.into()))
    }

    async fn update_task(
        &self,
        request: Request<UpdateTaskRequest>,
    ) -> Result<Response<TaskMessage>, Status> {
        let req = request.into_inner();
        let id = req.id.clone();

        let task = self.service.update_task(&id, req.into()).await?;
        Ok(Response::new(task.into()))
    }

    async fn delete_task(
        &self,
        request: Request<DeleteTaskRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let id = request.into_inner().id;
        self.service.delete_task(&id).await?;

        info!(task_id = %id, "Deleted task");
        Ok(Response::new(DeleteResponse { success: true }))
    }

    async fn list_tasks(
        &self,
        request: Request<ListTasksRequest>,
    ) -> Result<Response<ListTasksResponse>, Status> {
        let page = self.service.list_tasks(request.into_inner().into()).await?;
        Ok(Response::new(conversions::list_response(page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::MemoryStore;
    use tonic::Code;

    fn service() -> TaskServiceImpl<MemoryStore<Task>> {
        TaskServiceImpl::new(TaskService::new(MemoryStore::new()))
    }

    fn create(title: &str, user_id: &str) -> Request<CreateTaskRequest> {
        Request::new(CreateTaskRequest {
            title: title.to_string(),
            user_id: user_id.to_string(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let svc = service();
        let created = svc.create_task(create("Write report", "u1")).await.unwrap().into_inner();
        assert_eq!(created.id.len(), 24);
        assert!(!created.completed);

        let fetched = svc
            .get_task(Request::new(GetTaskRequest { id: created.id.clone() }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_handlers_built_from_clones_share_one_store() {
        let domain = TaskService::new(MemoryStore::new());
        let writer = TaskServiceImpl::new(domain.clone());
        let reader = TaskServiceImpl::new(domain);

        let created = writer.create_task(create("Shared", "u1")).await.unwrap().into_inner();
        let fetched = reader
            .get_task(Request::new(GetTaskRequest { id: created.id.clone() }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_with_empty_title_is_invalid_argument() {
        let err = service().create_task(create("", "u1")).await.unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_invalid_argument() {
        let err = service()
            .get_task(Request::new(GetTaskRequest { id: "nope".into() }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let err = service()
            .get_task(Request::new(GetTaskRequest {
                id: "64b7f0c2a1b2c3d4e5f60718".into(),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let svc = service();
        let created = svc.create_task(create("Draft", "u1")).await.unwrap().into_inner();

        let updated = svc
            .update_task(Request::new(UpdateTaskRequest {
                id: created.id.clone(),
                title: "Final".into(),
                description: "done".into(),
                completed: true,
                due_date: String::new(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Final");
        assert!(updated.completed);
        assert_eq!(updated.user_id, "u1");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let svc = service();
        let created = svc.create_task(create("Temp", "u1")).await.unwrap().into_inner();

        for _ in 0..2 {
            let response = svc
                .delete_task(Request::new(DeleteTaskRequest { id: created.id.clone() }))
                .await
                .unwrap()
                .into_inner();
            assert!(response.success);
        }
    }

    #[tokio::test]
    async fn test_list_filters_by_owner_and_completion() {
        let svc = service();
        svc.create_task(create("a", "u1")).await.unwrap();
        svc.create_task(create("b", "u1")).await.unwrap();
        svc.create_task(create("c", "u2")).await.unwrap();

        let response = svc
            .list_tasks(Request::new(ListTasksRequest {
                user_id: "u1".into(),
                completed: Some(false),
                page: 1,
                limit: 1,
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.total, 2);
        assert_eq!(response.tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_store_outage_is_unavailable() {
        let store = MemoryStore::<Task>::new();
        store.set_unavailable(true);
        let svc = TaskServiceImpl::new(TaskService::new(store));

        let err = svc.create_task(create("x", "u1")).await.unwrap_err();
        assert_eq!(err.code(), Code::Unavailable);
    }
}
