//! Notifications Domain
//!
//! Per-user messages. A notification is created unread and is not modified
//! afterwards; listing returns the newest first.

pub mod conversions;
pub mod error;
pub mod models;
pub mod service;

pub use error::{NotificationError, NotificationResult};
pub use models::{Notification, NotificationFilter, SendNotification};
pub use service::NotificationService;
