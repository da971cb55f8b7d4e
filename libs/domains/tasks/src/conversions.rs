//! Proto ↔ domain conversions for tasks

use database::Page;
use rpc::tasks as proto;

use crate::models::{CreateTask, Task, TaskFilter, UpdateTask};

impl From<Task> for proto::Task {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: task.title,
            description: task.description,
            user_id: task.user_id,
            completed: task.completed,
            due_date: task.due_date,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

impl From<proto::CreateTaskRequest> for CreateTask {
    fn from(req: proto::CreateTaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            user_id: req.user_id,
            due_date: req.due_date,
        }
    }
}

/// The id travels separately; see `TaskService::update_task`.
impl From<proto::UpdateTaskRequest> for UpdateTask {
    fn from(req: proto::UpdateTaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            completed: req.completed,
            due_date: req.due_date,
        }
    }
}

impl From<proto::ListTasksRequest> for TaskFilter {
    fn from(req: proto::ListTasksRequest) -> Self {
        Self {
            user_id: req.user_id,
            completed: req.completed,
            page: i64::from(req.page),
            limit: i64::from(req.limit),
        }
    }
}

/// Wire form of a task page; `total` counts the whole filtered set.
pub fn list_response(page: Page<Task>) -> proto::ListTasksResponse {
    proto::ListTasksResponse {
        tasks: page.items.into_iter().map(Into::into).collect(),
        total: i64::try_from(page.total).unwrap_or(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_task_to_proto_renders_hex_id() {
        let id = ObjectId::new();
        let task = Task {
            id: Some(id),
            ..Task::new(CreateTask {
                title: "t".into(),
                ..Default::default()
            })
        };
        let proto: proto::Task = task.into();
        assert_eq!(proto.id, id.to_hex());
        assert!(!proto.completed);
    }

    #[test]
    fn test_list_request_keeps_optional_completed() {
        let filter: TaskFilter = proto::ListTasksRequest {
            user_id: "u1".into(),
            completed: None,
            page: 2,
            limit: 10,
        }
        .into();
        assert_eq!(filter.completed, None);
        assert_eq!((filter.page, filter.limit), (2, 10));
    }

    #[test]
    fn test_list_response_reports_full_total() {
        let task = Task::new(CreateTask {
            title: "only one on this page".into(),
            ..Default::default()
        });
        let response = list_response(Page {
            items: vec![task],
            total: 7,
        });
        assert_eq!(response.tasks.len(), 1);
        assert_eq!(response.total, 7);
    }
}
