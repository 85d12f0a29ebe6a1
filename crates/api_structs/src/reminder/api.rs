use crate::dtos::{ReminderDTO, ReminderRunSummaryDTO};
use serde::{Deserialize, Serialize};
use tt_reminders_domain::{ResponseValue, ID};

pub mod trigger_reminders {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub summary: ReminderRunSummaryDTO,
    }
}

pub mod get_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub notification_id: ID,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder: ReminderDTO,
    }
}

pub mod respond_to_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub notification_id: ID,
    }

    /// `response` is validated by the server so that invalid values are
    /// reported with a proper message
    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub response: String,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub response: ResponseValue,
        /// Only set when skipping, whether the club was told about it
        pub club_notified: Option<bool>,
        pub club_notification_error: Option<String>,
    }
}
