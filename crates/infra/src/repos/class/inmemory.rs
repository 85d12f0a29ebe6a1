use super::IClassRepo;
use crate::repos::{notification::InMemoryNotificationRepo, shared::inmemory_repo::*};
use chrono::NaiveDate;
use std::sync::Arc;
use tt_reminders_domain::{ClassRecord, ID};

pub struct InMemoryClassRepo {
    classes: std::sync::Mutex<Vec<ClassRecord>>,
    notifications: Arc<InMemoryNotificationRepo>,
}

impl InMemoryClassRepo {
    pub fn new(notifications: Arc<InMemoryNotificationRepo>) -> Self {
        Self {
            classes: std::sync::Mutex::new(vec![]),
            notifications,
        }
    }
}

#[async_trait::async_trait]
impl IClassRepo for InMemoryClassRepo {
    async fn insert(&self, class: &ClassRecord) -> anyhow::Result<()> {
        insert(class, &self.classes);
        Ok(())
    }

    async fn save(&self, class: &ClassRecord) -> anyhow::Result<()> {
        save(class, &self.classes);
        Ok(())
    }

    async fn find(&self, class_id: &ID) -> Option<ClassRecord> {
        find(class_id, &self.classes)
    }

    async fn find_due(
        &self,
        target_date: NaiveDate,
        _weekday: u32,
    ) -> anyhow::Result<Vec<ClassRecord>> {
        Ok(find_by(&self.classes, |class| {
            class.is_due_on(target_date)
                && !self.notifications.has_notification(&class.id, target_date)
        }))
    }
}
