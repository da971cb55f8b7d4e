use database::Entity;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event document. Written once, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub event_type: String,
    #[serde(default)]
    pub resource_id: String,
    #[serde(default)]
    pub metadata: String,
    #[serde(default)]
    pub created_at: String,
}

impl Event {
    pub fn new(input: TrackEvent) -> Self {
        Self {
            id: None,
            user_id: input.user_id,
            event_type: input.event_type,
            resource_id: input.resource_id,
            metadata: input.metadata,
            created_at: String::new(),
        }
    }
}

impl Entity for Event {
    const COLLECTION: &'static str = "events";
    const TRACKS_UPDATES: bool = false;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn stamp_created(&mut self, now: &str) {
        self.created_at = now.to_string();
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct TrackEvent {
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "event_type must not be empty"))]
    pub event_type: String,
    pub resource_id: String,
    pub metadata: String,
}

/// Requested reporting window. Accepted for compatibility; not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,
    /// Not completed, with a due date earlier than the time of the call
    pub overdue_tasks: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    /// Distinct task owners
    pub active_users: u64,
}
