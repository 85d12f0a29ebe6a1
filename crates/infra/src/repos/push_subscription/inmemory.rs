use super::IPushSubscriptionRepo;
use crate::repos::shared::inmemory_repo::*;
use tt_reminders_domain::{PushSubscription, ID};

pub struct InMemoryPushSubscriptionRepo {
    subscriptions: std::sync::Mutex<Vec<PushSubscription>>,
}

impl InMemoryPushSubscriptionRepo {
    pub fn new() -> Self {
        Self {
            subscriptions: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IPushSubscriptionRepo for InMemoryPushSubscriptionRepo {
    async fn replace(&self, subscription: &PushSubscription) -> anyhow::Result<()> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        subscriptions.retain(|s| s.user_id != subscription.user_id);
        subscriptions.push(subscription.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Option<PushSubscription>> {
        Ok(find_by(&self.subscriptions, |s| s.user_id == *user_id)
            .into_iter()
            .next())
    }

    async fn delete(&self, subscription_id: &ID) -> Option<PushSubscription> {
        delete(subscription_id, &self.subscriptions)
    }

    async fn delete_by_user(&self, user_id: &ID) -> Option<PushSubscription> {
        find_and_delete_by(&self.subscriptions, |s| s.user_id == *user_id)
            .into_iter()
            .next()
    }
}
