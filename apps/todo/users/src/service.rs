use database::DocumentStore;
use domain_users::{TokenIssuer, User, UserService};
use grpc_client::server::ServerConfig;
use rpc::DeleteResponse;
use rpc::users::user_service_server::{UserService as UserRpc, UserServiceServer};
use rpc::users::{
    AuthRequest, AuthResponse, CreateUserRequest, DeleteUserRequest, GetUserRequest,
    UpdateUserRequest, User as UserMessage,
};
use tonic::codec::CompressionEncoding;
use tonic::{Request, Response, Status};
use tracing::info;

pub struct UserServiceImpl<S, T>
where
    S: DocumentStore<User> + 'static,
    T: TokenIssuer + 'static,
{
    service: UserService<S, T>,
}

impl<S, T> UserServiceImpl<S, T>
where
    S: DocumentStore<User> + 'static,
    T: TokenIssuer + 'static,
{
    pub fn new(service: UserService<S, T>) -> Self {
        Self { service }
    }

    pub fn into_server(self, config: &ServerConfig) -> UserServiceServer<Self> {
        let server = UserServiceServer::new(self)
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
impl<S, T> UserRpc for UserServiceImpl<S, T>
where
    S: DocumentStore<User> + 'static,
    T: TokenIssuer + 'static,
{
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserMessage>, Status> {
        let user = self.service.create_user(request.into_inner().into()).await?;
        Ok(Response::new(user.into()))
    }

    async fn get_user(&self, request: Request<GetUserRequest>) -> Result<Response<UserMessage>, Status> {
        let user = self.service.get_user(&request.into_inner().id).await?;
        Ok(Response::new(user.into()))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserMessage>, Status> {
        let req = request.into_inner();
        let id = req.id.clone();

        let user = self.service.update_user(&id, req.into()).await?;
        Ok(Response::new(user.into()))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let id = request.into_inner().id;
        self.service.delete_user(&id).await?;

        info!(user_id = %id, "Deleted user");
        Ok(Response::new(DeleteResponse { success: true }))
    }

    async fn authenticate_user(
        &self,
        request: Request<AuthRequest>,
    ) -> Result<Response<AuthResponse>, Status> {
        let req = request.into_inner();
        let authenticated = self.service.authenticate(&req.email, &req.password).await?;
        Ok(Response::new(authenticated.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::MemoryStore;
    use domain_users::{JwtConfig, JwtTokenIssuer};
    use tonic::Code;

    const SECRET: &str = "an-integration-secret-of-32-chars!";

    fn issuer() -> JwtTokenIssuer {
        JwtTokenIssuer::new(&JwtConfig::new(SECRET).unwrap())
    }

    fn service() -> UserServiceImpl<MemoryStore<User>, JwtTokenIssuer> {
        UserServiceImpl::new(UserService::new(MemoryStore::new(), issuer()))
    }

    fn grace() -> Request<CreateUserRequest> {
        Request::new(CreateUserRequest {
            username: "grace".into(),
            email: "grace@example.com".into(),
            password: "hopper-1906".into(),
        })
    }

    fn login(password: &str) -> Request<AuthRequest> {
        Request::new(AuthRequest {
            email: "grace@example.com".into(),
            password: password.into(),
        })
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let svc = service();
        let created = svc.create_user(grace()).await.unwrap().into_inner();
        assert_eq!(created.username, "grace");
        assert_eq!(created.id.len(), 24);

        let fetched = svc
            .get_user(Request::new(GetUserRequest { id: created.id.clone() }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(fetched.email, "grace@example.com");
    }

    #[tokio::test]
    async fn test_authenticate_issues_verifiable_token() {
        let svc = service();
        let created = svc.create_user(grace()).await.unwrap().into_inner();

        let response = svc
            .authenticate_user(login("hopper-1906"))
            .await
            .unwrap()
            .into_inner();

        let claims = issuer().verify(&response.token).unwrap();
        assert_eq!(claims.sub, created.id);
        assert_eq!(claims.email, "grace@example.com");
        assert_eq!(response.user.map(|u| u.id), Some(created.id));
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_unauthenticated() {
        let svc = service();
        svc.create_user(grace()).await.unwrap();

        let err = svc.authenticate_user(login("wrong")).await.unwrap_err();
        assert_eq!(err.code(), Code::Unauthenticated);

        let unknown = Request::new(AuthRequest {
            email: "nobody@example.com".into(),
            password: "hopper-1906".into(),
        });
        let err = svc.authenticate_user(unknown).await.unwrap_err();
        assert_eq!(err.code(), Code::Unauthenticated);
    }

    #[tokio::test]
    async fn test_update_with_new_password_changes_login() {
        let svc = service();
        let created = svc.create_user(grace()).await.unwrap().into_inner();

        svc.update_user(Request::new(UpdateUserRequest {
            id: created.id,
            username: "grace".into(),
            email: "grace@example.com".into(),
            password: "cobol-1959".into(),
        }))
        .await
        .unwrap();

        assert!(svc.authenticate_user(login("hopper-1906")).await.is_err());
        assert!(svc.authenticate_user(login("cobol-1959")).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create_user(grace()).await.unwrap().into_inner();

        let deleted = svc
            .delete_user(Request::new(DeleteUserRequest { id: created.id.clone() }))
            .await
            .unwrap()
            .into_inner();
        assert!(deleted.success);

        let err = svc
            .get_user(Request::new(GetUserRequest { id: created.id }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_create_with_missing_password_is_invalid_argument() {
        let request = Request::new(CreateUserRequest {
            username: "grace".into(),
            email: "grace@example.com".into(),
            password: String::new(),
        });
        let err = service().create_user(request).await.unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }
}
