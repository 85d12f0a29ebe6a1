use actix_web::rt::time::timeout;
use std::time::Duration;
use tracing::warn;
use tt_reminders_domain::{PushMessage, PushSubscription};
use tt_reminders_infra::{DeliveryOptions, DeliveryOutcome, SkipNotice, TtContext};

/// Sends `message` to a single subscription. A delivery that does not
/// finish within the configured push timeout counts as an error.
pub async fn deliver(
    subscription: &PushSubscription,
    message: &PushMessage,
    ctx: &TtContext,
) -> DeliveryOutcome {
    let options = DeliveryOptions {
        ttl_seconds: ctx.config.push_ttl_seconds,
        ..Default::default()
    };
    let limit = Duration::from_millis(ctx.config.push_timeout_millis);

    match timeout(limit, ctx.services.push.send(subscription, message, &options)).await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(
                "Push delivery to: {} timed out after {}ms",
                subscription.endpoint, ctx.config.push_timeout_millis
            );
            DeliveryOutcome::Error(format!(
                "Timed out after {}ms",
                ctx.config.push_timeout_millis
            ))
        }
    }
}

/// Tells the club that a member skips a class. Gives up with an error once
/// the configured club timeout has passed.
pub async fn notify_club(notice: &SkipNotice, ctx: &TtContext) -> anyhow::Result<()> {
    let limit = Duration::from_millis(ctx.config.club_timeout_millis);

    match timeout(limit, ctx.services.club.notify_skip(notice)).await {
        Ok(res) => res,
        Err(_) => Err(anyhow::anyhow!(
            "Club notification timed out after {}ms",
            ctx.config.club_timeout_millis
        )),
    }
}
