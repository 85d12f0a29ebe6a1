use crate::shared::usecase::UseCase;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::warn;
use tt_reminders_domain::{weekday_of, ReminderCandidate, ID};
use tt_reminders_infra::TtContext;

/// Selects the classes whose owners should be reminded about an
/// occurrence on `target_date`
#[derive(Debug)]
pub struct FindDueRemindersUseCase {
    pub target_date: NaiveDate,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for FindDueRemindersUseCase {
    type Response = Vec<ReminderCandidate>;

    type Error = UseCaseError;

    const NAME: &'static str = "FindDueReminders";

    async fn execute(&mut self, ctx: &TtContext) -> Result<Self::Response, Self::Error> {
        let classes = ctx
            .repos
            .classes
            .find_due(self.target_date, weekday_of(self.target_date))
            .await
            .map_err(|e| {
                warn!("Unable to query due classes: {:?}", e);
                UseCaseError::StorageError
            })?;

        let mut owner_ids: Vec<ID> = classes.iter().map(|c| c.user_id.clone()).collect();
        owner_ids.sort_by_key(|id| id.to_string());
        owner_ids.dedup();

        let owners = ctx
            .repos
            .users
            .find_many(&owner_ids)
            .await
            .map_err(|e| {
                warn!("Unable to query owners of due classes: {:?}", e);
                UseCaseError::StorageError
            })?
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect::<HashMap<_, _>>();

        let candidates = classes
            .into_iter()
            .filter_map(|class| match owners.get(&class.user_id) {
                Some(owner) => Some(ReminderCandidate {
                    owner: owner.clone(),
                    class,
                }),
                None => {
                    warn!(
                        "Skipping class: {} because its owner: {} was not found",
                        class.id, class.user_id
                    );
                    None
                }
            })
            .collect();

        Ok(candidates)
    }
}
