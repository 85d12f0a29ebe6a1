use crate::{
    occurrence::format_day,
    shared::entity::{Entity, ID},
    ClassRecord, ClassType, Notification,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keys the browser generated for encrypting messages to a `PushSubscription`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushKeys {
    pub p256dh: String,
    pub auth: String,
}

/// A web push endpoint of a `User`. A `User` has at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct PushSubscription {
    pub id: ID,
    pub user_id: ID,
    pub endpoint: String,
    pub keys: PushKeys,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidSubscriptionError {
    #[error("Subscription endpoint and keys are required")]
    MissingField,
    #[error("Subscription endpoint: {0} is not a valid http(s) url")]
    InvalidEndpoint(String),
}

impl PushSubscription {
    pub fn new(
        user_id: ID,
        endpoint: String,
        keys: PushKeys,
    ) -> Result<Self, InvalidSubscriptionError> {
        if endpoint.trim().is_empty()
            || keys.p256dh.trim().is_empty()
            || keys.auth.trim().is_empty()
        {
            return Err(InvalidSubscriptionError::MissingField);
        }
        match url::Url::parse(&endpoint) {
            Ok(url) if url.scheme() == "https" || url.scheme() == "http" => {}
            _ => return Err(InvalidSubscriptionError::InvalidEndpoint(endpoint)),
        }

        Ok(Self {
            id: Default::default(),
            user_id,
            endpoint,
            keys,
        })
    }
}

impl Entity<ID> for PushSubscription {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Reminds the owner that the last penalty free cancellation day of a
/// class occurrence has come
#[derive(Debug, Clone, PartialEq)]
pub struct ClassReminderMessage {
    pub class_id: ID,
    pub notification_id: ID,
    pub class_title: String,
    pub class_type: ClassType,
    pub target_date: NaiveDate,
    pub days_ahead: u32,
    /// Where the client routes the owner to answer the reminder
    pub response_url: String,
}

impl ClassReminderMessage {
    pub fn new(
        class: &ClassRecord,
        notification: &Notification,
        days_ahead: u32,
        base_path: &str,
    ) -> Self {
        Self {
            class_id: class.id.clone(),
            notification_id: notification.id.clone(),
            class_title: class.title.clone(),
            class_type: class.class_type,
            target_date: notification.target_date,
            days_ahead,
            response_url: format!(
                "{}{}",
                base_path.trim_end_matches('/'),
                notification.response_path()
            ),
        }
    }
}

/// Everything that is delivered through push. Transports translate it
/// into the wire format of their provider.
#[derive(Debug, Clone, PartialEq)]
pub enum PushMessage {
    ClassReminder(ClassReminderMessage),
    /// Sent on request so a `User` can verify that push works
    Test { days_ahead: u32 },
}

impl PushMessage {
    pub fn title(&self) -> String {
        match self {
            Self::ClassReminder(_) => "Class Cancellation Reminder".into(),
            Self::Test { .. } => "Test Notification".into(),
        }
    }

    pub fn body(&self) -> String {
        match self {
            Self::ClassReminder(m) => format!(
                "Your {} class \"{}\" is in {} days ({}). Today is the last day to cancel without penalty!",
                m.class_type,
                m.class_title,
                m.days_ahead,
                format_day(m.target_date)
            ),
            Self::Test { days_ahead } => format!(
                "Push notifications are working! You will receive reminders {} days before your classes.",
                days_ahead
            ),
        }
    }

    pub fn url(&self) -> String {
        match self {
            Self::ClassReminder(m) => m.response_url.clone(),
            Self::Test { .. } => "/dashboard".into(),
        }
    }
}
