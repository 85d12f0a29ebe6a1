mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemoryClassRepo;
pub use postgres::PostgresClassRepo;
use tt_reminders_domain::{ClassRecord, ID};

#[async_trait::async_trait]
pub trait IClassRepo: Send + Sync {
    async fn insert(&self, class: &ClassRecord) -> anyhow::Result<()>;
    async fn save(&self, class: &ClassRecord) -> anyhow::Result<()>;
    async fn find(&self, class_id: &ID) -> Option<ClassRecord>;
    /// Classes that are not cancelled, take place on `target_date` and
    /// have not been notified about that date yet. `weekday` is the
    /// weekday of `target_date` with Sunday as 0.
    async fn find_due(
        &self,
        target_date: NaiveDate,
        weekday: u32,
    ) -> anyhow::Result<Vec<ClassRecord>>;
}
