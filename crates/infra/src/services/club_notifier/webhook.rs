use super::{IClubNotifier, SkipNotice};
use crate::config::ClubWebhookConfig;
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub struct WebhookClubNotifier {
    config: ClubWebhookConfig,
    client: Client,
}

impl WebhookClubNotifier {
    pub const KEY_HEADER: &'static str = "tt-reminders-webhook-key";

    pub fn new(config: ClubWebhookConfig, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { config, client }
    }
}

#[async_trait::async_trait]
impl IClubNotifier for WebhookClubNotifier {
    async fn notify_skip(&self, notice: &SkipNotice) -> anyhow::Result<()> {
        let res = self
            .client
            .post(&self.config.url)
            .header(Self::KEY_HEADER, &self.config.key)
            .json(notice)
            .send()
            .await
            .context("Club webhook request failed")?;

        let status = res.status();
        if !status.is_success() {
            anyhow::bail!("Club webhook returned status: {}", status.as_u16());
        }
        info!(
            "Club notified about {} skipping {} on {}",
            notice.member_name, notice.class_title, notice.target_date
        );
        Ok(())
    }
}
