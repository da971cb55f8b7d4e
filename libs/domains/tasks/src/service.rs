use database::{DocumentStore, Filter, Page, Patch, Query};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskFilter, UpdateTask, fields};

/// Service layer for Task business logic
pub struct TaskService<S: DocumentStore<Task>> {
    store: Arc<S>,
}

impl<S: DocumentStore<Task>> Clone for TaskService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore<Task>> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a task. New tasks are never completed.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self.store.insert(Task::new(input)).await?;
        info!(task_id = ?task.id, "Task created");
        Ok(task)
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, id: &str) -> TaskResult<Task> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Overwrite the mutable fields, then return the stored state.
    ///
    /// A missing id surfaces as `NotFound` from the read-back.
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: &str, input: UpdateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let patch = Patch::new()
            .set(fields::TITLE, input.title)
            .set(fields::DESCRIPTION, input.description)
            .set(fields::COMPLETED, input.completed)
            .set(fields::DUE_DATE, input.due_date);

        self.store.update_fields(id, patch).await?;
        Ok(self.store.find_by_id(id).await?)
    }

    /// Idempotent: deleting an absent task succeeds.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: &str) -> TaskResult<()> {
        self.store.delete(id).await?;
        info!(task_id = %id, "Task deleted");
        Ok(())
    }

    /// One page of tasks in store order, plus the total match count.
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, filter: TaskFilter) -> TaskResult<Page<Task>> {
        let mut predicate = Filter::new();
        if !filter.user_id.is_empty() {
            predicate = predicate.eq(fields::USER_ID, filter.user_id);
        }
        if let Some(completed) = filter.completed {
            predicate = predicate.eq(fields::COMPLETED, completed);
        }

        let query = Query::new(predicate).page(filter.page, filter.limit);
        Ok(self.store.query(query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::MemoryStore;

    fn service() -> (TaskService<MemoryStore<Task>>, MemoryStore<Task>) {
        let store = MemoryStore::new();
        (TaskService::new(store.clone()), store)
    }

    fn create(title: &str, user_id: &str) -> CreateTask {
        CreateTask {
            title: title.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_task_defaults() {
        let (service, _) = service();
        let task = service.create_task(create("buy milk", "u1")).await.unwrap();

        assert!(task.id.is_some());
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
        assert!(!task.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_create_task_requires_title() {
        let (service, store) = service();
        let err = service.create_task(create("", "u1")).await.unwrap_err();

        assert!(matches!(err, TaskError::Validation(_)));
        assert!(store.raw_documents().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_delete_get() {
        let (service, _) = service();
        let task = service.create_task(create("buy milk", "u1")).await.unwrap();
        let id = task.id.unwrap().to_hex();

        assert_eq!(service.get_task(&id).await.unwrap(), task);

        service.delete_task(&id).await.unwrap();
        assert!(matches!(
            service.get_task(&id).await,
            Err(TaskError::NotFound(_))
        ));
        // Second delete is still a success
        service.delete_task(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_id_never_reaches_store() {
        let (service, store) = service();
        store.set_unavailable(true);

        for id in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert!(matches!(
                service.get_task(id).await,
                Err(TaskError::InvalidId(_))
            ));
            assert!(matches!(
                service.delete_task(id).await,
                Err(TaskError::InvalidId(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_update_then_read_back() {
        let (service, _) = service();
        let task = service.create_task(create("draft", "u1")).await.unwrap();
        let id = task.id.unwrap().to_hex();

        let updated = service
            .update_task(
                &id,
                UpdateTask {
                    title: "final".into(),
                    description: "done".into(),
                    completed: true,
                    due_date: "2030-01-01T00:00:00Z".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "final");
        assert!(updated.completed);
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.created_at, task.created_at);
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(service.get_task(&id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_not_found() {
        let (service, _) = service();
        let id = mongodb::bson::oid::ObjectId::new().to_hex();

        let err = service
            .update_task(
                &id,
                UpdateTask {
                    title: "x".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::NotFound(ref missing) if *missing == id));
    }

    #[tokio::test]
    async fn test_update_racing_delete_is_not_found() {
        let (service, store) = service();
        let task = service.create_task(create("buy milk", "u1")).await.unwrap();
        let id = task.id.unwrap().to_hex();

        store.set_delete_after_update(true);
        let err = service
            .update_task(
                &id,
                UpdateTask {
                    title: "buy oat milk".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::NotFound(ref missing) if *missing == id));
        assert!(store.raw_documents().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_and_pages() {
        let (service, _) = service();
        for i in 0..5 {
            service
                .create_task(create(&format!("t{i}"), "u1"))
                .await
                .unwrap();
        }
        service.create_task(create("other", "u2")).await.unwrap();

        let first = service.list_tasks(TaskFilter {
            user_id: "u1".into(),
            completed: None,
            page: 0,
            limit: 2,
        });
        let page = first.await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);

        let everyone = service
            .list_tasks(TaskFilter {
                limit: 100,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(everyone.total, 6);

        let none = service
            .list_tasks(TaskFilter {
                user_id: "u1".into(),
                completed: Some(true),
                page: 0,
                limit: 10,
            })
            .await
            .unwrap();
        assert!(none.items.is_empty());
        assert_eq!(none.total, 0);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let (service, store) = service();
        store.set_unavailable(true);

        let err = service.create_task(create("x", "u1")).await.unwrap_err();
        assert!(matches!(err, TaskError::Store(ref e) if e.is_unavailable()));
    }
}
