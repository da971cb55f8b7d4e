//! Generates the tonic client/server stubs for the `todo` package.
//!
//! Messages are plain Rust structs in `src/`, so no `protoc` is needed.

use tonic_build::manual::{Builder, Method, Service};

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::{input}"))
        .output_type(format!("crate::{output}"))
        .codec_path("tonic_prost::ProstCodec")
        .build()
}

fn service(name: &str, methods: Vec<Method>) -> Service {
    methods
        .into_iter()
        .fold(Service::builder().name(name).package("todo"), |builder, method| {
            builder.method(method)
        })
        .build()
}

fn main() {
    let task_service = service(
        "TaskService",
        vec![
            unary("create_task", "CreateTask", "tasks::CreateTaskRequest", "tasks::Task"),
            unary("get_task", "GetTask", "tasks::GetTaskRequest", "tasks::Task"),
            unary("update_task", "UpdateTask", "tasks::UpdateTaskRequest", "tasks::Task"),
            unary(
                "delete_task",
                "DeleteTask",
                "tasks::DeleteTaskRequest",
                "DeleteResponse",
            ),
            unary(
                "list_tasks",
                "ListTasks",
                "tasks::ListTasksRequest",
                "tasks::ListTasksResponse",
            ),
        ],
    );

    let user_service = service(
        "UserService",
        vec![
            unary("create_user", "CreateUser", "users::CreateUserRequest", "users::User"),
            unary("get_user", "GetUser", "users::GetUserRequest", "users::User"),
            unary("update_user", "UpdateUser", "users::UpdateUserRequest", "users::User"),
            unary(
                "delete_user",
                "DeleteUser",
                "users::DeleteUserRequest",
                "DeleteResponse",
            ),
            unary(
                "authenticate_user",
                "AuthenticateUser",
                "users::AuthRequest",
                "users::AuthResponse",
            ),
        ],
    );

    let notification_service = service(
        "NotificationService",
        vec![
            unary(
                "send_notification",
                "SendNotification",
                "notifications::SendNotificationRequest",
                "notifications::Notification",
            ),
            unary(
                "get_notifications",
                "GetNotifications",
                "notifications::GetNotificationsRequest",
                "notifications::GetNotificationsResponse",
            ),
        ],
    );

    let analytics_service = service(
        "AnalyticsService",
        vec![
            unary(
                "track_event",
                "TrackEvent",
                "analytics::TrackEventRequest",
                "analytics::Event",
            ),
            unary(
                "get_user_stats",
                "GetUserStats",
                "analytics::GetUserStatsRequest",
                "analytics::UserStats",
            ),
            unary(
                "get_task_stats",
                "GetTaskStats",
                "analytics::GetTaskStatsRequest",
                "analytics::TaskStats",
            ),
        ],
    );

    Builder::new().compile(&[
        task_service,
        user_service,
        notification_service,
        analytics_service,
    ]);

    println!("cargo:rerun-if-changed=build.rs");
}
