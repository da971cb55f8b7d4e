use database::{DocumentStore, Filter, ReadStore, timestamp};
use domain_tasks::Task;
use domain_tasks::models::fields;
use std::sync::Arc;
use tracing::{debug, instrument};
use validator::Validate;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{Event, StatsRange, TaskStats, TrackEvent, UserStats};

/// Event tracking over `E`, statistics over the task store `T`.
pub struct AnalyticsService<E, T>
where
    E: DocumentStore<Event>,
    T: ReadStore<Task>,
{
    events: Arc<E>,
    tasks: Arc<T>,
}

impl<E, T> Clone for AnalyticsService<E, T>
where
    E: DocumentStore<Event>,
    T: ReadStore<Task>,
{
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl<E, T> AnalyticsService<E, T>
where
    E: DocumentStore<Event>,
    T: ReadStore<Task>,
{
    pub fn new(events: E, tasks: T) -> Self {
        Self {
            events: Arc::new(events),
            tasks: Arc::new(tasks),
        }
    }

    #[instrument(skip(self, input), fields(event_type = %input.event_type))]
    pub async fn track_event(&self, input: TrackEvent) -> AnalyticsResult<Event> {
        input
            .validate()
            .map_err(|e| AnalyticsError::Validation(e.to_string()))?;

        Ok(self.events.insert(Event::new(input)).await?)
    }

    /// Four independent counts over one user's tasks.
    #[instrument(skip(self))]
    pub async fn get_user_stats(&self, user_id: &str, range: StatsRange) -> AnalyticsResult<UserStats> {
        let owned = || Filter::new().eq(fields::USER_ID, user_id);
        let now = timestamp();

        let total_tasks = self.tasks.count(owned()).await?;
        let completed_tasks = self.tasks.count(owned().eq(fields::COMPLETED, true)).await?;
        let pending_tasks = self.tasks.count(owned().eq(fields::COMPLETED, false)).await?;
        let overdue_tasks = self
            .tasks
            .count(
                owned()
                    .eq(fields::COMPLETED, false)
                    .ne(fields::DUE_DATE, "")
                    .lt(fields::DUE_DATE, now.as_str()),
            )
            .await?;

        debug!(total_tasks, completed_tasks, pending_tasks, overdue_tasks, "user stats");
        Ok(UserStats {
            total_tasks,
            completed_tasks,
            pending_tasks,
            overdue_tasks,
        })
    }

    /// Counts across every task, plus the number of distinct owners.
    #[instrument(skip(self))]
    pub async fn get_task_stats(&self, range: StatsRange) -> AnalyticsResult<TaskStats> {
        let total_tasks = self.tasks.count(Filter::new()).await?;
        let completed_tasks = self
            .tasks
            .count(Filter::new().eq(fields::COMPLETED, true))
            .await?;
        let active_users = self
            .tasks
            .count_distinct(Filter::new(), fields::USER_ID)
            .await?;

        Ok(TaskStats {
            total_tasks,
            completed_tasks,
            active_users,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{MemoryStore, Patch};
    use domain_tasks::{CreateTask, TaskService, UpdateTask};

    struct Fixture {
        analytics: AnalyticsService<MemoryStore<Event>, MemoryStore<Task>>,
        tasks: TaskService<MemoryStore<Task>>,
        task_store: MemoryStore<Task>,
    }

    fn fixture() -> Fixture {
        let task_store = MemoryStore::<Task>::new();
        Fixture {
            analytics: AnalyticsService::new(MemoryStore::new(), task_store.clone()),
            tasks: TaskService::new(task_store.clone()),
            task_store,
        }
    }

    async fn add_task(fixture: &Fixture, user_id: &str, due_date: &str, completed: bool) {
        let task = fixture
            .tasks
            .create_task(CreateTask {
                title: "t".into(),
                user_id: user_id.into(),
                due_date: due_date.into(),
                ..Default::default()
            })
            .await
            .unwrap();
        if completed {
            fixture
                .tasks
                .update_task(
                    &task.id.unwrap().to_hex(),
                    UpdateTask {
                        title: "t".into(),
                        completed: true,
                        due_date: due_date.into(),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_track_event_appends() {
        let fixture = fixture();
        let event = fixture
            .analytics
            .track_event(TrackEvent {
                user_id: "u1".into(),
                event_type: "task_created".into(),
                resource_id: "t1".into(),
                metadata: r#"{"source":"web"}"#.into(),
            })
            .await
            .unwrap();

        assert!(event.id.is_some());
        assert_eq!(event.metadata, r#"{"source":"web"}"#);
        assert!(!event.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_track_event_requires_fields() {
        let fixture = fixture();
        let err = fixture
            .analytics
            .track_event(TrackEvent {
                user_id: "u1".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::Validation(_)));
    }

    #[tokio::test]
    async fn test_task_stats_on_empty_collection() {
        let fixture = fixture();
        let stats = fixture
            .analytics
            .get_task_stats(StatsRange::default())
            .await
            .unwrap();
        assert_eq!(stats, TaskStats::default());
    }

    #[tokio::test]
    async fn test_user_stats_counts() {
        let fixture = fixture();
        add_task(&fixture, "u1", "2000-01-01T00:00:00Z", false).await; // overdue
        add_task(&fixture, "u1", "2999-01-01T00:00:00Z", false).await; // pending, not due
        add_task(&fixture, "u1", "", false).await; // no due date
        add_task(&fixture, "u1", "2000-01-01T00:00:00Z", true).await; // done late
        add_task(&fixture, "u2", "2000-01-01T00:00:00Z", false).await;

        let stats = fixture
            .analytics
            .get_user_stats("u1", StatsRange::default())
            .await
            .unwrap();
        assert_eq!(
            stats,
            UserStats {
                total_tasks: 4,
                completed_tasks: 1,
                pending_tasks: 3,
                overdue_tasks: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_date_range_is_ignored() {
        let fixture = fixture();
        add_task(&fixture, "u1", "", false).await;

        let range = StatsRange {
            start_date: "2999-01-01T00:00:00Z".into(),
            end_date: "2999-12-31T00:00:00Z".into(),
        };
        let stats = fixture.analytics.get_user_stats("u1", range.clone()).await.unwrap();
        assert_eq!(stats.total_tasks, 1);

        let stats = fixture.analytics.get_task_stats(range).await.unwrap();
        assert_eq!(stats.total_tasks, 1);
    }

    #[tokio::test]
    async fn test_task_stats_counts_distinct_owners() {
        let fixture = fixture();
        add_task(&fixture, "u1", "", true).await;
        add_task(&fixture, "u1", "", false).await;
        add_task(&fixture, "u2", "", false).await;

        let stats = fixture
            .analytics
            .get_task_stats(StatsRange::default())
            .await
            .unwrap();
        assert_eq!(
            stats,
            TaskStats {
                total_tasks: 3,
                completed_tasks: 1,
                active_users: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_stats_reflect_deletes() {
        let fixture = fixture();
        add_task(&fixture, "u1", "", false).await;
        let stored = fixture.task_store.raw_documents().unwrap();
        let id = stored[0].get_object_id("_id").unwrap().to_hex();

        fixture
            .task_store
            .update_fields(&id, Patch::new().set("completed", true))
            .await
            .unwrap();
        let stats = fixture
            .analytics
            .get_user_stats("u1", StatsRange::default())
            .await
            .unwrap();
        assert_eq!(stats.completed_tasks, 1);

        fixture.tasks.delete_task(&id).await.unwrap();
        let stats = fixture
            .analytics
            .get_user_stats("u1", StatsRange::default())
            .await
            .unwrap();
        assert_eq!(stats, UserStats::default());
    }

    #[tokio::test]
    async fn test_unavailable_task_store() {
        let fixture = fixture();
        fixture.task_store.set_unavailable(true);

        let err = fixture
            .analytics
            .get_task_stats(StatsRange::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::Store(ref e) if e.is_unavailable()));
    }
}
