mod base;
mod push;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use push::PushClient;
pub use push::SubscribeInput;
use reminder::ReminderClient;
pub use reminder::RespondToReminderInput;
use status::StatusClient;
use std::sync::Arc;
pub use tt_reminders_api_structs::dtos::*;
pub use tt_reminders_domain::{ClassType, PushKeys, Recurrence, ResponseValue, ID};

// Domain
pub use tt_reminders_api_structs::dtos::ReminderDTO as Reminder;
pub use tt_reminders_api_structs::dtos::ReminderRunSummaryDTO as ReminderRunSummary;

/// TT Reminders SDK
///
/// The SDK contains methods for interacting with the TT Reminders server
/// API. Members authenticate with the token they got at login, reminder
/// runs are triggered with the admin secret.
#[derive(Clone)]
pub struct TtRemindersSDK {
    pub push: PushClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl TtRemindersSDK {
    /// Client without credentials, only the status endpoint is usable
    pub fn new(address: String) -> Self {
        Self::from_base(BaseClient::new(address))
    }

    pub fn with_user_token<T: Into<String>>(address: String, token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_user_token(token.into());
        Self::from_base(base)
    }

    pub fn with_admin_secret<T: Into<String>>(address: String, secret: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_admin_secret(secret.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let push = PushClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            push,
            reminder,
            status,
        }
    }
}
