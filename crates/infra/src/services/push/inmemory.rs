use super::{DeliveryOptions, DeliveryOutcome, IPushTransport};
use std::{collections::HashMap, sync::Mutex, time::Duration};
use tt_reminders_domain::{PushMessage, PushSubscription};

#[derive(Debug, Clone)]
pub struct SentPush {
    pub subscription: PushSubscription,
    pub message: PushMessage,
    pub options: DeliveryOptions,
}

/// Records every delivery and answers with the outcome scripted for the
/// endpoint, `DeliveryOutcome::Ok` if none is
pub struct InMemoryPushTransport {
    sent: Mutex<Vec<SentPush>>,
    outcomes: Mutex<HashMap<String, DeliveryOutcome>>,
    delay: Mutex<Option<Duration>>,
}

impl InMemoryPushTransport {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            outcomes: Mutex::new(HashMap::new()),
            delay: Mutex::new(None),
        }
    }

    pub fn set_outcome(&self, endpoint: &str, outcome: DeliveryOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), outcome);
    }

    /// Makes every delivery take at least `delay`
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn sent(&self) -> Vec<SentPush> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IPushTransport for InMemoryPushTransport {
    async fn send(
        &self,
        subscription: &PushSubscription,
        message: &PushMessage,
        options: &DeliveryOptions,
    ) -> DeliveryOutcome {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.sent.lock().unwrap().push(SentPush {
            subscription: subscription.clone(),
            message: message.clone(),
            options: options.clone(),
        });
        self.outcomes
            .lock()
            .unwrap()
            .get(&subscription.endpoint)
            .cloned()
            .unwrap_or(DeliveryOutcome::Ok)
    }
}
