use super::IClassRepo;
use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::warn;
use tt_reminders_domain::{ClassRecord, Recurrence, ID};

pub struct PostgresClassRepo {
    pool: PgPool,
}

impl PostgresClassRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ClassRaw {
    class_uid: Uuid,
    user_uid: Uuid,
    title: String,
    class_type: String,
    instructor: Option<String>,
    notes: Option<String>,
    cancelled: bool,
    date_time: Option<NaiveDateTime>,
    weekday: Option<i32>,
    time_of_day: Option<NaiveTime>,
}

impl TryFrom<ClassRaw> for ClassRecord {
    type Error = anyhow::Error;

    fn try_from(raw: ClassRaw) -> anyhow::Result<Self> {
        let recurrence = match (raw.date_time, raw.weekday, raw.time_of_day) {
            (Some(date_time), None, None) => Recurrence::OneTime { date_time },
            (None, Some(weekday), Some(time_of_day)) => {
                Recurrence::weekly(u32::try_from(weekday)?, time_of_day)?
            }
            _ => anyhow::bail!("Class: {} has an inconsistent schedule", raw.class_uid),
        };

        Ok(Self {
            id: raw.class_uid.into(),
            user_id: raw.user_uid.into(),
            title: raw.title,
            class_type: raw.class_type.parse()?,
            instructor: raw.instructor,
            notes: raw.notes,
            cancelled: raw.cancelled,
            recurrence,
        })
    }
}

/// Columns of the schedule of a class, either the first or the two last are set
fn schedule_columns(
    recurrence: &Recurrence,
) -> (Option<NaiveDateTime>, Option<i32>, Option<NaiveTime>) {
    match recurrence {
        Recurrence::OneTime { date_time } => (Some(*date_time), None, None),
        Recurrence::Recurring {
            weekday,
            time_of_day,
        } => (None, Some(*weekday as i32), Some(*time_of_day)),
    }
}

#[async_trait::async_trait]
impl IClassRepo for PostgresClassRepo {
    async fn insert(&self, class: &ClassRecord) -> anyhow::Result<()> {
        let (date_time, weekday, time_of_day) = schedule_columns(&class.recurrence);
        sqlx::query(
            r#"
            INSERT INTO classes
            (class_uid, user_uid, title, class_type, instructor, notes, cancelled, date_time, weekday, time_of_day)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(class.id.inner_ref())
        .bind(class.user_id.inner_ref())
        .bind(&class.title)
        .bind(class.class_type.as_str())
        .bind(&class.instructor)
        .bind(&class.notes)
        .bind(class.cancelled)
        .bind(date_time)
        .bind(weekday)
        .bind(time_of_day)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Unable to insert class: {}", class.id))?;

        Ok(())
    }

    async fn save(&self, class: &ClassRecord) -> anyhow::Result<()> {
        let (date_time, weekday, time_of_day) = schedule_columns(&class.recurrence);
        sqlx::query(
            r#"
            UPDATE classes SET
                title = $2,
                class_type = $3,
                instructor = $4,
                notes = $5,
                cancelled = $6,
                date_time = $7,
                weekday = $8,
                time_of_day = $9
            WHERE class_uid = $1
            "#,
        )
        .bind(class.id.inner_ref())
        .bind(&class.title)
        .bind(class.class_type.as_str())
        .bind(&class.instructor)
        .bind(&class.notes)
        .bind(class.cancelled)
        .bind(date_time)
        .bind(weekday)
        .bind(time_of_day)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Unable to save class: {}", class.id))?;

        Ok(())
    }

    async fn find(&self, class_id: &ID) -> Option<ClassRecord> {
        let raw = sqlx::query_as::<_, ClassRaw>(
            r#"
            SELECT * FROM classes AS c
            WHERE c.class_uid = $1
            "#,
        )
        .bind(class_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()?;

        match raw.try_into() {
            Ok(class) => Some(class),
            Err(e) => {
                warn!("Unable to read class: {}. Error: {:?}", class_id, e);
                None
            }
        }
    }

    async fn find_due(
        &self,
        target_date: NaiveDate,
        weekday: u32,
    ) -> anyhow::Result<Vec<ClassRecord>> {
        let classes = sqlx::query_as::<_, ClassRaw>(
            r#"
            SELECT c.* FROM classes AS c
            WHERE c.cancelled = FALSE
            AND (
                (c.date_time IS NOT NULL AND c.date_time::date = $1)
                OR
                (c.weekday IS NOT NULL AND c.weekday = $2)
            )
            AND NOT EXISTS (
                SELECT 1 FROM notifications AS n
                WHERE n.class_uid = c.class_uid AND n.target_date = $1
            )
            "#,
        )
        .bind(target_date)
        .bind(weekday as i32)
        .fetch_all(&self.pool)
        .await
        .context("Unable to query classes due for a reminder")?;

        let mut due = Vec::with_capacity(classes.len());
        for raw in classes {
            let class_uid = raw.class_uid;
            match ClassRecord::try_from(raw) {
                Ok(class) => due.push(class),
                Err(e) => warn!("Skipping unreadable class: {}. Error: {:?}", class_uid, e),
            }
        }
        Ok(due)
    }
}
