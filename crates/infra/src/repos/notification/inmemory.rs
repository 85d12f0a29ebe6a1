use super::INotificationRepo;
use crate::repos::shared::{inmemory_repo::*, repo::InsertError};
use chrono::NaiveDate;
use tt_reminders_domain::{Notification, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(vec![]),
        }
    }

    /// Used by the other inmemory repos to emulate joins
    pub(crate) fn has_notification(&self, class_id: &ID, target_date: NaiveDate) -> bool {
        !find_by(&self.notifications, |n| {
            n.class_id == *class_id && n.target_date == target_date
        })
        .is_empty()
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> Result<(), InsertError> {
        insert_unique(notification, &self.notifications, |existing, new| {
            existing.id == new.id
                || (existing.class_id == new.class_id && existing.target_date == new.target_date)
        })
    }

    async fn find(&self, notification_id: &ID) -> Option<Notification> {
        find(notification_id, &self.notifications)
    }

    async fn find_by_class(&self, class_id: &ID) -> Vec<Notification> {
        find_by(&self.notifications, |n| n.class_id == *class_id)
    }
}
