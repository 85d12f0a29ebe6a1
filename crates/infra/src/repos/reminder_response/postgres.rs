use super::IReminderResponseRepo;
use crate::repos::shared::repo::InsertError;
use chrono::{DateTime, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::warn;
use tt_reminders_domain::{ReminderResponse, ID};

pub struct PostgresReminderResponseRepo {
    pool: PgPool,
}

impl PostgresReminderResponseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderResponseRaw {
    response_uid: Uuid,
    notification_uid: Uuid,
    user_uid: Uuid,
    class_uid: Uuid,
    response: String,
    responded: DateTime<Utc>,
}

impl TryFrom<ReminderResponseRaw> for ReminderResponse {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderResponseRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.response_uid.into(),
            notification_id: raw.notification_uid.into(),
            user_id: raw.user_uid.into(),
            class_id: raw.class_uid.into(),
            value: raw.response.parse()?,
            responded: raw.responded,
        })
    }
}

#[async_trait::async_trait]
impl IReminderResponseRepo for PostgresReminderResponseRepo {
    async fn insert(&self, response: &ReminderResponse) -> Result<(), InsertError> {
        sqlx::query(
            r#"
            INSERT INTO reminder_responses
            (response_uid, notification_uid, user_uid, class_uid, response, responded)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(response.id.inner_ref())
        .bind(response.notification_id.inner_ref())
        .bind(response.user_id.inner_ref())
        .bind(response.class_id.inner_ref())
        .bind(response.value.as_str())
        .bind(response.responded)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_notification(&self, notification_id: &ID) -> Option<ReminderResponse> {
        let raw = sqlx::query_as::<_, ReminderResponseRaw>(
            r#"
            SELECT * FROM reminder_responses AS r
            WHERE r.notification_uid = $1
            "#,
        )
        .bind(notification_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()?;

        match raw.try_into() {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(
                    "Unable to read response to notification: {}. Error: {:?}",
                    notification_id, e
                );
                None
            }
        }
    }
}
