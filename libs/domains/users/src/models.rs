use database::Entity;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod fields {
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const PASSWORD_HASH: &str = "password_hash";
}

/// User document. Only ever holds an Argon2 PHC string, never plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password_hash,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";

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

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// An empty `password` leaves the stored hash untouched.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    pub password: String,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: User,
}
