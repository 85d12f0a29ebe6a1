mod inmemory;
mod postgres;

use crate::repos::shared::repo::InsertError;
pub use inmemory::InMemoryNotificationRepo;
pub use postgres::PostgresNotificationRepo;
use tt_reminders_domain::{Notification, ID};

/// The notification log of sent reminders
#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    /// Fails with `InsertError::Conflict` if there already is a `Notification`
    /// for the same class and target date
    async fn insert(&self, notification: &Notification) -> Result<(), InsertError>;
    async fn find(&self, notification_id: &ID) -> Option<Notification>;
    async fn find_by_class(&self, class_id: &ID) -> Vec<Notification>;
}
