use crate::shared::{delivery::deliver, usecase::UseCase};
use chrono::NaiveDate;
use tracing::{info, warn};
use tt_reminders_domain::{ClassReminderMessage, Notification, PushMessage, ReminderCandidate};
use tt_reminders_infra::{DeliveryOutcome, InsertError, TtContext};

/// Records that the owner of a candidate has been reminded about the
/// occurrence on `target_date` and pushes the reminder to the owner.
///
/// Recording happens first, and only the run that manages to record the
/// `Notification` delivers it. Failed deliveries are not retried.
#[derive(Debug)]
pub struct DispatchReminderUseCase {
    pub candidate: ReminderCandidate,
    pub target_date: NaiveDate,
}

#[derive(Debug, PartialEq)]
pub enum DispatchOutcome {
    /// Another run already recorded a `Notification` for the occurrence
    AlreadyHandled,
    Dispatched {
        notification: Notification,
        delivered: usize,
        gone: usize,
        failed: usize,
    },
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchReminderUseCase {
    type Response = DispatchOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "DispatchReminder";

    async fn execute(&mut self, ctx: &TtContext) -> Result<Self::Response, Self::Error> {
        let class = &self.candidate.class;
        let owner = &self.candidate.owner;

        let notification =
            Notification::new(class.id.clone(), self.target_date, ctx.sys.get_utc_now());
        match ctx.repos.notifications.insert(&notification).await {
            Ok(_) => {}
            Err(InsertError::Conflict) => {
                info!(
                    "Reminder for class: {} on {} was already sent",
                    class.id, self.target_date
                );
                return Ok(DispatchOutcome::AlreadyHandled);
            }
            Err(InsertError::Storage(e)) => {
                warn!(
                    "Unable to record reminder for class: {}. Error: {:?}",
                    class.id, e
                );
                return Err(UseCaseError::StorageError);
            }
        }

        let message = PushMessage::ClassReminder(ClassReminderMessage::new(
            class,
            &notification,
            ctx.config.horizon_days,
            &ctx.config.app_base_path,
        ));

        let (mut delivered, mut gone, mut failed) = (0, 0, 0);
        // A user has at most one subscription
        let subscriptions = match ctx.repos.push_subscriptions.find_by_user(&owner.id).await {
            Ok(subscriptions) => subscriptions,
            Err(e) => {
                warn!(
                    "Unable to look up push subscription of user: {}. Error: {:?}",
                    owner.id, e
                );
                failed += 1;
                None
            }
        };
        for subscription in subscriptions.iter() {
            match deliver(subscription, &message, ctx).await {
                DeliveryOutcome::Ok => delivered += 1,
                DeliveryOutcome::Gone => {
                    gone += 1;
                    info!(
                        "Removing expired push subscription: {} of user: {}",
                        subscription.id, owner.id
                    );
                    ctx.repos.push_subscriptions.delete(&subscription.id).await;
                }
                DeliveryOutcome::Error(reason) => {
                    failed += 1;
                    warn!(
                        "Unable to push reminder for class: {} to user: {}. Error: {}",
                        class.id, owner.id, reason
                    );
                }
            }
        }

        Ok(DispatchOutcome::Dispatched {
            notification,
            delivered,
            gone,
            failed,
        })
    }
}
