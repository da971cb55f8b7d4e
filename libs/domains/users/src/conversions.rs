//! Proto ↔ domain conversions for users
//!
//! The outbound `User` message has no password field, so the hash cannot leak.

use rpc::users as proto;

use crate::models::{AuthenticatedUser, CreateUser, UpdateUser, User};

impl From<User> for proto::User {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<proto::CreateUserRequest> for CreateUser {
    fn from(req: proto::CreateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

impl From<proto::UpdateUserRequest> for UpdateUser {
    fn from(req: proto::UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

impl From<AuthenticatedUser> for proto::AuthResponse {
    fn from(auth: AuthenticatedUser) -> Self {
        Self {
            token: auth.token,
            user: Some(auth.user.into()),
        }
    }
}
