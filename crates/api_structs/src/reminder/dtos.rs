use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tt_reminders_domain::{
    ClassRecord, ClassType, Notification, Recurrence, ReminderResponse, ReminderRunSummary,
    ResponseValue, ID,
};

/// A sent reminder together with the class it is about and the answer of
/// the owner, if any
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub notification_id: ID,
    pub class_id: ID,
    pub title: String,
    pub class_type: ClassType,
    pub instructor: Option<String>,
    pub recurrence: Recurrence,
    pub target_date: NaiveDate,
    pub sent_at: DateTime<Utc>,
    pub already_responded: bool,
    pub previous_response: Option<ResponseValue>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl ReminderDTO {
    pub fn new(
        notification: Notification,
        class: ClassRecord,
        response: Option<ReminderResponse>,
    ) -> Self {
        Self {
            notification_id: notification.id,
            class_id: class.id,
            title: class.title,
            class_type: class.class_type,
            instructor: class.instructor,
            recurrence: class.recurrence,
            target_date: notification.target_date,
            sent_at: notification.created,
            already_responded: response.is_some(),
            previous_response: response.as_ref().map(|r| r.value),
            responded_at: response.map(|r| r.responded),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRunSummaryDTO {
    pub target_date: Option<NaiveDate>,
    pub candidates: usize,
    pub dispatched: usize,
    pub already_handled: usize,
    pub storage_failures: usize,
    pub delivered: usize,
    pub gone: usize,
    pub failed: usize,
}

impl ReminderRunSummaryDTO {
    pub fn new(summary: ReminderRunSummary) -> Self {
        Self {
            target_date: summary.target_date,
            candidates: summary.candidates,
            dispatched: summary.dispatched,
            already_handled: summary.already_handled,
            storage_failures: summary.storage_failures,
            delivered: summary.delivered,
            gone: summary.gone,
            failed: summary.failed,
        }
    }
}
