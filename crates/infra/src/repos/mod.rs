mod class;
mod notification;
mod push_subscription;
mod reminder_response;
mod shared;
mod users;

pub use class::{IClassRepo, InMemoryClassRepo, PostgresClassRepo};
pub use notification::{INotificationRepo, InMemoryNotificationRepo, PostgresNotificationRepo};
pub use push_subscription::{
    IPushSubscriptionRepo, InMemoryPushSubscriptionRepo, PostgresPushSubscriptionRepo,
};
pub use reminder_response::{
    IReminderResponseRepo, InMemoryReminderResponseRepo, PostgresReminderResponseRepo,
};
pub use shared::repo::InsertError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use users::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub classes: Arc<dyn IClassRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
    pub reminder_responses: Arc<dyn IReminderResponseRepo>,
    pub push_subscriptions: Arc<dyn IPushSubscriptionRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            classes: Arc::new(PostgresClassRepo::new(pool.clone())),
            notifications: Arc::new(PostgresNotificationRepo::new(pool.clone())),
            reminder_responses: Arc::new(PostgresReminderResponseRepo::new(pool.clone())),
            push_subscriptions: Arc::new(PostgresPushSubscriptionRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        let notifications = Arc::new(InMemoryNotificationRepo::new());
        Self {
            classes: Arc::new(InMemoryClassRepo::new(notifications.clone())),
            notifications,
            reminder_responses: Arc::new(InMemoryReminderResponseRepo::new()),
            push_subscriptions: Arc::new(InMemoryPushSubscriptionRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}
