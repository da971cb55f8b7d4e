use rpc::analytics as proto;

use crate::models::{Event, StatsRange, TaskStats, TrackEvent, UserStats};

fn count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl From<Event> for proto::Event {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: event.user_id,
            event_type: event.event_type,
            resource_id: event.resource_id,
            metadata: event.metadata,
            created_at: event.created_at,
        }
    }
}

impl From<proto::TrackEventRequest> for TrackEvent {
    fn from(req: proto::TrackEventRequest) -> Self {
        Self {
            user_id: req.user_id,
            event_type: req.event_type,
            resource_id: req.resource_id,
            metadata: req.metadata,
        }
    }
}

impl From<&proto::GetUserStatsRequest> for StatsRange {
    fn from(req: &proto::GetUserStatsRequest) -> Self {
        Self {
            start_date: req.start_date.clone(),
            end_date: req.end_date.clone(),
        }
    }
}

impl From<proto::GetTaskStatsRequest> for StatsRange {
    fn from(req: proto::GetTaskStatsRequest) -> Self {
        Self {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<UserStats> for proto::UserStats {
    fn from(stats: UserStats) -> Self {
        Self {
            total_tasks: count(stats.total_tasks),
            completed_tasks: count(stats.completed_tasks),
            pending_tasks: count(stats.pending_tasks),
            overdue_tasks: count(stats.overdue_tasks),
        }
    }
}

impl From<TaskStats> for proto::TaskStats {
    fn from(stats: TaskStats) -> Self {
        Self {
            total_tasks: count(stats.total_tasks),
            completed_tasks: count(stats.completed_tasks),
            active_users: count(stats.active_users),
        }
    }
}
