use super::{DeliveryOptions, DeliveryOutcome, IPushTransport};
use tracing::info;
use tt_reminders_domain::{PushMessage, PushSubscription};

/// Stands in for a real push service when no VAPID keys are configured
pub struct LogPushTransport {}

#[async_trait::async_trait]
impl IPushTransport for LogPushTransport {
    async fn send(
        &self,
        subscription: &PushSubscription,
        message: &PushMessage,
        options: &DeliveryOptions,
    ) -> DeliveryOutcome {
        info!(
            "[push disabled] Would send \"{}\" to user: {} at {} (ttl: {}s, urgency: {}): {}",
            message.title(),
            subscription.user_id,
            subscription.endpoint,
            options.ttl_seconds,
            options.urgency.as_str(),
            message.body()
        );
        DeliveryOutcome::Ok
    }
}
