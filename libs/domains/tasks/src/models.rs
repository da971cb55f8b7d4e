use database::Entity;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored field names, shared with readers of the task collection.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const USER_ID: &str = "user_id";
    pub const COMPLETED: &str = "completed";
    pub const DUE_DATE: &str = "due_date";
}

/// Task document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Owner. Not checked against the user store.
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub completed: bool,
    /// Opaque date-time string; empty when the task has no due date
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Task {
    pub fn new(input: CreateTask) -> Self {
        Self {
            id: None,
            title: input.title,
            description: input.description,
            user_id: input.user_id,
            completed: false,
            due_date: input.due_date,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl Entity for Task {
    const COLLECTION: &'static str = "tasks";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn stamp_created(&mut self, now: &str) {
        self.created_at = now.to_string();
        self.updated_at = now.to_string();
    }
}

/// Input for creating a task
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub due_date: String,
}

/// Replacement values for the mutable task fields
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateTask {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub due_date: String,
}

/// Filter and page window for listing tasks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// Empty means every owner
    pub user_id: String,
    pub completed: Option<bool>,
    pub page: i64,
    pub limit: i64,
}
