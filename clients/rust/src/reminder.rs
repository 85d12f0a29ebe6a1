use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use tt_reminders_api_structs::*;
use tt_reminders_domain::ID;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct RespondToReminderInput {
    pub notification_id: ID,
    /// `attend` or `skip`
    pub response: String,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Runs a reminder check right away. Requires the admin secret.
    pub async fn trigger(&self) -> APIResponse<trigger_reminders::APIResponse> {
        self.base
            .post_empty("reminders/trigger".into(), StatusCode::OK)
            .await
    }

    pub async fn get(&self, notification_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", notification_id), StatusCode::OK)
            .await
    }

    pub async fn respond(
        &self,
        input: RespondToReminderInput,
    ) -> APIResponse<respond_to_reminder::APIResponse> {
        let body = respond_to_reminder::RequestBody {
            response: input.response,
        };
        self.base
            .post(
                body,
                format!("reminders/{}/respond", input.notification_id),
                StatusCode::OK,
            )
            .await
    }
}
