use super::IReminderResponseRepo;
use crate::repos::shared::{inmemory_repo::*, repo::InsertError};
use tt_reminders_domain::{ReminderResponse, ID};

pub struct InMemoryReminderResponseRepo {
    responses: std::sync::Mutex<Vec<ReminderResponse>>,
}

impl InMemoryReminderResponseRepo {
    pub fn new() -> Self {
        Self {
            responses: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderResponseRepo for InMemoryReminderResponseRepo {
    async fn insert(&self, response: &ReminderResponse) -> Result<(), InsertError> {
        insert_unique(response, &self.responses, |existing, new| {
            existing.id == new.id || existing.notification_id == new.notification_id
        })
    }

    async fn find_by_notification(&self, notification_id: &ID) -> Option<ReminderResponse> {
        find_by(&self.responses, |r| r.notification_id == *notification_id)
            .into_iter()
            .next()
    }
}
