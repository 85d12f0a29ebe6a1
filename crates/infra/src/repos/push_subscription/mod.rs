mod inmemory;
mod postgres;

pub use inmemory::InMemoryPushSubscriptionRepo;
pub use postgres::PostgresPushSubscriptionRepo;
use tt_reminders_domain::{PushSubscription, ID};

#[async_trait::async_trait]
pub trait IPushSubscriptionRepo: Send + Sync {
    /// Stores the subscription as the only one of its `User`, any
    /// previous subscription of the `User` is removed
    async fn replace(&self, subscription: &PushSubscription) -> anyhow::Result<()>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Option<PushSubscription>>;
    async fn delete(&self, subscription_id: &ID) -> Option<PushSubscription>;
    async fn delete_by_user(&self, user_id: &ID) -> Option<PushSubscription>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_reminders_domain::PushKeys;

    fn subscription(user_id: &ID, endpoint: &str) -> PushSubscription {
        PushSubscription::new(
            user_id.clone(),
            endpoint.into(),
            PushKeys {
                p256dh: "p256dh".into(),
                auth: "auth".into(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn a_user_has_at_most_one_subscription() {
        let repo = InMemoryPushSubscriptionRepo::new();
        let user_id = ID::default();
        let other_user_id = ID::default();

        let first = subscription(&user_id, "https://push.example.com/1");
        let second = subscription(&user_id, "https://push.example.com/2");
        let others = subscription(&other_user_id, "https://push.example.com/3");
        repo.replace(&first).await.unwrap();
        repo.replace(&others).await.unwrap();
        repo.replace(&second).await.unwrap();

        assert_eq!(repo.find_by_user(&user_id).await.unwrap(), Some(second.clone()));
        assert!(repo.delete(&first.id).await.is_none());
        assert_eq!(repo.delete(&second.id).await, Some(second));
        assert!(repo.find_by_user(&user_id).await.unwrap().is_none());

        assert_eq!(repo.delete_by_user(&other_user_id).await, Some(others));
        assert!(repo.delete_by_user(&other_user_id).await.is_none());
    }
}
