use database::Page;
use rpc::notifications as proto;

use crate::models::{Notification, NotificationFilter, SendNotification};

impl From<Notification> for proto::Notification {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: notification.user_id,
            message: notification.message,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

impl From<proto::SendNotificationRequest> for SendNotification {
    fn from(req: proto::SendNotificationRequest) -> Self {
        Self {
            user_id: req.user_id,
            message: req.message,
        }
    }
}

impl From<proto::GetNotificationsRequest> for NotificationFilter {
    fn from(req: proto::GetNotificationsRequest) -> Self {
        Self {
            user_id: req.user_id,
            unread_only: req.unread_only,
            page: i64::from(req.page),
            limit: i64::from(req.limit),
        }
    }
}

pub fn list_response(page: Page<Notification>) -> proto::GetNotificationsResponse {
    proto::GetNotificationsResponse {
        notifications: page.items.into_iter().map(Into::into).collect(),
        total: i64::try_from(page.total).unwrap_or(i64::MAX),
    }
}
