use super::IPushSubscriptionRepo;
use anyhow::Context;
use sqlx::{types::Uuid, FromRow, PgPool};
use tt_reminders_domain::{PushKeys, PushSubscription, ID};

pub struct PostgresPushSubscriptionRepo {
    pool: PgPool,
}

impl PostgresPushSubscriptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PushSubscriptionRaw {
    subscription_uid: Uuid,
    user_uid: Uuid,
    endpoint: String,
    p256dh: String,
    auth: String,
}

impl From<PushSubscriptionRaw> for PushSubscription {
    fn from(raw: PushSubscriptionRaw) -> Self {
        Self {
            id: raw.subscription_uid.into(),
            user_id: raw.user_uid.into(),
            endpoint: raw.endpoint,
            keys: PushKeys {
                p256dh: raw.p256dh,
                auth: raw.auth,
            },
        }
    }
}

#[async_trait::async_trait]
impl IPushSubscriptionRepo for PostgresPushSubscriptionRepo {
    async fn replace(&self, subscription: &PushSubscription) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM push_subscriptions AS s
            WHERE s.user_uid = $1
            "#,
        )
        .bind(subscription.user_id.inner_ref())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO push_subscriptions
            (subscription_uid, user_uid, endpoint, p256dh, auth)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(subscription.id.inner_ref())
        .bind(subscription.user_id.inner_ref())
        .bind(&subscription.endpoint)
        .bind(&subscription.keys.p256dh)
        .bind(&subscription.keys.auth)
        .execute(&mut *tx)
        .await?;

        tx.commit().await.with_context(|| {
            format!(
                "Unable to store push subscription of user: {}",
                subscription.user_id
            )
        })
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Option<PushSubscription>> {
        let subscription = sqlx::query_as::<_, PushSubscriptionRaw>(
            r#"
            SELECT * FROM push_subscriptions AS s
            WHERE s.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to find push subscription of user: {}", user_id))?;

        Ok(subscription.map(|s| s.into()))
    }

    async fn delete(&self, subscription_id: &ID) -> Option<PushSubscription> {
        sqlx::query_as::<_, PushSubscriptionRaw>(
            r#"
            DELETE FROM push_subscriptions AS s
            WHERE s.subscription_uid = $1
            RETURNING *
            "#,
        )
        .bind(subscription_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|s| s.into())
    }

    async fn delete_by_user(&self, user_id: &ID) -> Option<PushSubscription> {
        sqlx::query_as::<_, PushSubscriptionRaw>(
            r#"
            DELETE FROM push_subscriptions AS s
            WHERE s.user_uid = $1
            RETURNING *
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|s| s.into())
    }
}
