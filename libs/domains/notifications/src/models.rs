use database::Entity;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod fields {
    pub const USER_ID: &str = "user_id";
    pub const READ: &str = "read";
}

/// Notification document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}

impl Notification {
    pub fn new(input: SendNotification) -> Self {
        Self {
            id: None,
            user_id: input.user_id,
            message: input.message,
            read: false,
            created_at: String::new(),
        }
    }
}

impl Entity for Notification {
    const COLLECTION: &'static str = "notifications";
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
pub struct SendNotification {
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFilter {
    /// Empty means every user
    pub user_id: String,
    pub unread_only: bool,
    pub page: i64,
    pub limit: i64,
}
