//! Wire contract for the todo services (protobuf package `todo`).
//!
//! Each module holds the messages of one service plus its generated
//! `*_client` and `*_server` modules. Messages also derive serde and
//! `utoipa::ToSchema`, so the gateway can use them as JSON bodies directly.
//! Every field has a default, so partial JSON objects decode.

pub mod analytics;
pub mod notifications;
pub mod tasks;
pub mod users;

/// Reply of every delete call. Deleting an absent record still succeeds.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct DeleteResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

/// Implement [`grpc_client::ConfigurableClient`] for generated clients by
/// forwarding to their inherent builder methods.
macro_rules! configurable_client {
    ($($client:path),+ $(,)?) => {
        $(
            impl grpc_client::ConfigurableClient for $client {
                fn accept_compressed(self, encoding: tonic::codec::CompressionEncoding) -> Self {
                    Self::accept_compressed(self, encoding)
                }

                fn send_compressed(self, encoding: tonic::codec::CompressionEncoding) -> Self {
                    Self::send_compressed(self, encoding)
                }

                fn max_decoding_message_size(self, limit: usize) -> Self {
                    Self::max_decoding_message_size(self, limit)
                }

                fn max_encoding_message_size(self, limit: usize) -> Self {
                    Self::max_encoding_message_size(self, limit)
                }
            }
        )+
    };
}

configurable_client!(
    tasks::task_service_client::TaskServiceClient<tonic::transport::Channel>,
    users::user_service_client::UserServiceClient<tonic::transport::Channel>,
    notifications::notification_service_client::NotificationServiceClient<tonic::transport::Channel>,
    analytics::analytics_service_client::AnalyticsServiceClient<tonic::transport::Channel>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_partial_json_uses_defaults() {
        let request: tasks::CreateTaskRequest =
            serde_json::from_str(r#"{"title":"buy milk"}"#).unwrap();
        assert_eq!(request.title, "buy milk");
        assert!(request.user_id.is_empty());
        assert!(request.due_date.is_empty());
    }

    #[test]
    fn test_optional_filter_survives_the_wire() {
        let request = tasks::ListTasksRequest {
            user_id: "u1".into(),
            completed: Some(false),
            page: 0,
            limit: 20,
        };
        let decoded = tasks::ListTasksRequest::decode(request.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.completed, Some(false));

        let unset = tasks::ListTasksRequest::decode(
            tasks::ListTasksRequest::default().encode_to_vec().as_slice(),
        )
        .unwrap();
        assert_eq!(unset.completed, None);
    }

    #[test]
    fn test_user_json_has_no_password() {
        let user = users::User {
            id: "65f1c0ffee0000000000abcd".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            created_at: "2024-01-01T00:00:00.000Z".into(),
            updated_at: "2024-01-01T00:00:00.000Z".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "ada");
    }

    #[test]
    fn test_service_names() {
        assert_eq!(tasks::task_service_server::SERVICE_NAME, "todo.TaskService");
        assert_eq!(users::user_service_server::SERVICE_NAME, "todo.UserService");
        assert_eq!(
            notifications::notification_service_server::SERVICE_NAME,
            "todo.NotificationService"
        );
        assert_eq!(
            analytics::analytics_service_server::SERVICE_NAME,
            "todo.AnalyticsService"
        );
    }
}
