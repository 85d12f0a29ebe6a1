mod club_notifier;
mod push;

use crate::config::Config;
pub use club_notifier::*;
pub use push::*;
use std::{sync::Arc, time::Duration};
use tracing::info;

/// Adapters to the world outside the service
#[derive(Clone)]
pub struct Services {
    pub push: Arc<dyn IPushTransport>,
    pub club: Arc<dyn IClubNotifier>,
}

impl Services {
    pub fn from_config(config: &Config) -> Self {
        let push: Arc<dyn IPushTransport> = match &config.vapid {
            Some(vapid) => {
                info!("Push notifications are sent with the web push protocol");
                Arc::new(WebPushTransport::new(vapid.clone()))
            }
            None => Arc::new(LogPushTransport {}),
        };
        let club: Arc<dyn IClubNotifier> = match &config.club_webhook {
            Some(webhook) => Arc::new(WebhookClubNotifier::new(
                webhook.clone(),
                Duration::from_millis(config.club_timeout_millis),
            )),
            None => Arc::new(DisabledClubNotifier {}),
        };

        Self { push, club }
    }

    pub fn create_inmemory() -> Self {
        Self {
            push: Arc::new(InMemoryPushTransport::new()),
            club: Arc::new(InMemoryClubNotifier::new()),
        }
    }
}
