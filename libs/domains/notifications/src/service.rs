use database::{CREATED_AT, DocumentStore, Filter, Page, Query, Sort};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{NotificationError, NotificationResult};
use crate::models::{Notification, NotificationFilter, SendNotification, fields};

pub struct NotificationService<S: DocumentStore<Notification>> {
    store: Arc<S>,
}

impl<S: DocumentStore<Notification>> Clone for NotificationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore<Notification>> NotificationService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn send_notification(&self, input: SendNotification) -> NotificationResult<Notification> {
        input
            .validate()
            .map_err(|e| NotificationError::Validation(e.to_string()))?;

        let notification = self.store.insert(Notification::new(input)).await?;
        info!(notification_id = ?notification.id, "Notification stored");
        Ok(notification)
    }

    /// Newest first; ties on `created_at` fall back to the id, which is
    /// creation ordered.
    #[instrument(skip(self))]
    pub async fn get_notifications(
        &self,
        filter: NotificationFilter,
    ) -> NotificationResult<Page<Notification>> {
        let mut predicate = Filter::new();
        if !filter.user_id.is_empty() {
            predicate = predicate.eq(fields::USER_ID, filter.user_id);
        }
        if filter.unread_only {
            predicate = predicate.eq(fields::READ, false);
        }

        let query = Query::new(predicate)
            .sort_by(Sort::desc(CREATED_AT))
            .sort_by(Sort::desc("_id"))
            .page(filter.page, filter.limit);
        Ok(self.store.query(query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{MemoryStore, Patch};

    fn send(user_id: &str, message: &str) -> SendNotification {
        SendNotification {
            user_id: user_id.into(),
            message: message.into(),
        }
    }

    fn filter(user_id: &str, unread_only: bool) -> NotificationFilter {
        NotificationFilter {
            user_id: user_id.into(),
            unread_only,
            page: 0,
            limit: 20,
        }
    }

    #[tokio::test]
    async fn test_send_creates_unread() {
        let service = NotificationService::new(MemoryStore::new());
        let notification = service.send_notification(send("u1", "hi")).await.unwrap();

        assert!(notification.id.is_some());
        assert!(!notification.read);
        assert!(!notification.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_send_requires_fields() {
        let service = NotificationService::new(MemoryStore::new());
        assert!(matches!(
            service.send_notification(send("", "hi")).await,
            Err(NotificationError::Validation(_))
        ));
        assert!(matches!(
            service.send_notification(send("u1", "")).await,
            Err(NotificationError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_newest_first() {
        let service = NotificationService::new(MemoryStore::new());
        for message in ["first", "second", "third"] {
            service.send_notification(send("u1", message)).await.unwrap();
        }

        let page = service.get_notifications(filter("u1", false)).await.unwrap();
        let messages: Vec<_> = page.items.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["third", "second", "first"]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_unread_only_and_owner_filter() {
        let store = MemoryStore::<Notification>::new();
        let service = NotificationService::new(store.clone());

        let seen = service.send_notification(send("u1", "seen")).await.unwrap();
        service.send_notification(send("u1", "fresh")).await.unwrap();
        service.send_notification(send("u2", "other")).await.unwrap();

        store
            .update_fields(&seen.id.unwrap().to_hex(), Patch::new().set(fields::READ, true))
            .await
            .unwrap();

        let unread = service.get_notifications(filter("u1", true)).await.unwrap();
        assert_eq!(unread.total, 1);
        assert_eq!(unread.items[0].message, "fresh");

        let all = service.get_notifications(filter("u1", false)).await.unwrap();
        assert_eq!(all.total, 2);
    }

    #[tokio::test]
    async fn test_paging_keeps_total() {
        let service = NotificationService::new(MemoryStore::new());
        for i in 0..7 {
            service
                .send_notification(send("u1", &format!("m{i}")))
                .await
                .unwrap();
        }

        let page = service
            .get_notifications(NotificationFilter {
                page: 1,
                limit: 3,
                ..filter("u1", false)
            })
            .await
            .unwrap();
        let messages: Vec<_> = page.items.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["m3", "m2", "m1"]);
        assert_eq!(page.total, 7);
    }
}
