mod inmemory;
mod postgres;

use crate::repos::shared::repo::InsertError;
pub use inmemory::InMemoryReminderResponseRepo;
pub use postgres::PostgresReminderResponseRepo;
use tt_reminders_domain::{ReminderResponse, ID};

#[async_trait::async_trait]
pub trait IReminderResponseRepo: Send + Sync {
    /// Fails with `InsertError::Conflict` if the notification already has
    /// a response
    async fn insert(&self, response: &ReminderResponse) -> Result<(), InsertError>;
    async fn find_by_notification(&self, notification_id: &ID) -> Option<ReminderResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tt_reminders_domain::ResponseValue;

    fn response(notification_id: &ID, value: ResponseValue) -> ReminderResponse {
        ReminderResponse {
            id: ID::default(),
            notification_id: notification_id.clone(),
            user_id: ID::default(),
            class_id: ID::default(),
            value,
            responded: Utc::now(),
        }
    }

    #[tokio::test]
    async fn responses_are_written_once() {
        let repo = InMemoryReminderResponseRepo::new();
        let notification_id = ID::default();
        assert!(repo.find_by_notification(&notification_id).await.is_none());

        let first = response(&notification_id, ResponseValue::Skip);
        assert!(repo.insert(&first).await.is_ok());
        assert!(matches!(
            repo.insert(&response(&notification_id, ResponseValue::Attend)).await,
            Err(InsertError::Conflict)
        ));
        assert_eq!(repo.find_by_notification(&notification_id).await, Some(first));
    }
}
