use super::INotificationRepo;
use crate::repos::shared::repo::InsertError;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use tt_reminders_domain::{Notification, ID};

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRaw {
    notification_uid: Uuid,
    class_uid: Uuid,
    target_date: NaiveDate,
    created: DateTime<Utc>,
}

impl From<NotificationRaw> for Notification {
    fn from(raw: NotificationRaw) -> Self {
        Self {
            id: raw.notification_uid.into(),
            class_id: raw.class_uid.into(),
            target_date: raw.target_date,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for PostgresNotificationRepo {
    async fn insert(&self, notification: &Notification) -> Result<(), InsertError> {
        sqlx::query(
            r#"
            INSERT INTO notifications
            (notification_uid, class_uid, target_date, created)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(notification.id.inner_ref())
        .bind(notification.class_id.inner_ref())
        .bind(notification.target_date)
        .bind(notification.created)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, notification_id: &ID) -> Option<Notification> {
        sqlx::query_as::<_, NotificationRaw>(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.notification_uid = $1
            "#,
        )
        .bind(notification_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|n| n.into())
    }

    async fn find_by_class(&self, class_id: &ID) -> Vec<Notification> {
        sqlx::query_as::<_, NotificationRaw>(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.class_uid = $1
            ORDER BY n.target_date
            "#,
        )
        .bind(class_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|n| n.into())
        .collect()
    }
}
