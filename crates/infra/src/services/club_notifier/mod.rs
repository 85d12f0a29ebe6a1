mod inmemory;
mod webhook;

use chrono::NaiveDate;
pub use inmemory::InMemoryClubNotifier;
use serde::Serialize;
pub use webhook::WebhookClubNotifier;

/// Tells the club that a member will not attend a class occurrence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipNotice {
    pub member_name: String,
    pub member_email: String,
    pub class_title: String,
    pub target_date: NaiveDate,
}

#[async_trait::async_trait]
pub trait IClubNotifier: Send + Sync {
    async fn notify_skip(&self, notice: &SkipNotice) -> anyhow::Result<()>;
}

/// Used when there is nowhere to send skip notices
pub struct DisabledClubNotifier {}

#[async_trait::async_trait]
impl IClubNotifier for DisabledClubNotifier {
    async fn notify_skip(&self, _notice: &SkipNotice) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("Club notifications not configured"))
    }
}
