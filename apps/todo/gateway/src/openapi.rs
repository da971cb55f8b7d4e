use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::tasks::create_task,
        api::tasks::get_task,
        api::tasks::update_task,
        api::tasks::delete_task,
        api::tasks::list_tasks,
        api::users::create_user,
        api::users::get_user,
        api::users::update_user,
        api::users::delete_user,
        api::users::authenticate,
        api::notifications::send_notification,
        api::notifications::get_notifications,
        api::analytics::track_event,
        api::analytics::get_user_stats,
        api::analytics::get_task_stats,
    ),
    components(schemas(
        axum_helpers::ErrorResponse,
        axum_helpers::ErrorCode,
        rpc::DeleteResponse,
        rpc::tasks::Task,
        rpc::tasks::CreateTaskRequest,
        rpc::tasks::UpdateTaskRequest,
        rpc::tasks::ListTasksResponse,
        rpc::users::User,
        rpc::users::CreateUserRequest,
        rpc::users::UpdateUserRequest,
        rpc::users::AuthRequest,
        rpc::users::AuthResponse,
        rpc::notifications::Notification,
        rpc::notifications::SendNotificationRequest,
        rpc::notifications::GetNotificationsResponse,
        rpc::analytics::Event,
        rpc::analytics::TrackEventRequest,
        rpc::analytics::UserStats,
        rpc::analytics::TaskStats,
    )),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "HTTP gateway for the task, user, notification and analytics services"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    tags(
        (name = "tasks", description = "Task CRUD and listing"),
        (name = "users", description = "User accounts and login"),
        (name = "notifications", description = "Per-user notifications"),
        (name = "analytics", description = "Usage events and task statistics")
    )
)]
pub struct ApiDoc;
