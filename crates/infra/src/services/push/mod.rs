mod inmemory;
mod log;
mod web_push;

pub use self::log::LogPushTransport;
use chrono::NaiveDate;
pub use inmemory::{InMemoryPushTransport, SentPush};
use serde::Serialize;
use tt_reminders_domain::{ClassType, PushMessage, PushSubscription, ID};
pub use web_push::WebPushTransport;

/// What the push service answered for a single delivery
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Ok,
    /// The subscription no longer exists and should be forgotten
    Gone,
    /// Transient failure, the subscription is kept
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    VeryLow,
    Low,
    Normal,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryOptions {
    pub ttl_seconds: u32,
    pub urgency: Urgency,
}

impl Default for DeliveryOptions {
    fn default() -> Self {
        Self {
            ttl_seconds: 60,
            urgency: Urgency::High,
        }
    }
}

#[async_trait::async_trait]
pub trait IPushTransport: Send + Sync {
    async fn send(
        &self,
        subscription: &PushSubscription,
        message: &PushMessage,
        options: &DeliveryOptions,
    ) -> DeliveryOutcome;
}

/// JSON document the service worker of the client receives
#[derive(Debug, Serialize)]
pub struct PushPayload {
    pub title: String,
    pub body: String,
    pub data: PushPayloadData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushPayloadData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<ID>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<ID>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

impl From<&PushMessage> for PushPayload {
    fn from(message: &PushMessage) -> Self {
        let data = match message {
            PushMessage::ClassReminder(m) => PushPayloadData {
                class_id: Some(m.class_id.clone()),
                notification_id: Some(m.notification_id.clone()),
                url: m.response_url.clone(),
                class_type: Some(m.class_type),
                target_date: Some(m.target_date),
            },
            PushMessage::Test { .. } => PushPayloadData {
                class_id: None,
                notification_id: None,
                url: message.url(),
                class_type: None,
                target_date: None,
            },
        };

        Self {
            title: message.title(),
            body: message.body(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};
    use tt_reminders_domain::{ClassRecord, ClassReminderMessage, Notification, Recurrence};

    #[test]
    fn class_reminder_payload_carries_correlation_data() {
        let class = ClassRecord::new(
            ID::default(),
            "Serve practice".into(),
            ClassType::Group,
            Recurrence::weekly(3, NaiveTime::from_hms_opt(18, 0, 0).unwrap()).unwrap(),
        );
        let notification =
            Notification::new(class.id.clone(), "2024-05-08".parse().unwrap(), Utc::now());
        let message =
            PushMessage::ClassReminder(ClassReminderMessage::new(&class, &notification, 7, ""));

        let json = serde_json::to_value(PushPayload::from(&message)).unwrap();
        assert_eq!(json["title"], "Class Cancellation Reminder");
        assert_eq!(json["data"]["classId"], class.id.to_string());
        assert_eq!(json["data"]["notificationId"], notification.id.to_string());
        assert_eq!(json["data"]["url"], format!("/respond/{}", notification.id));
        assert_eq!(json["data"]["classType"], "group");
        assert_eq!(json["data"]["targetDate"], "2024-05-08");
    }

    #[test]
    fn test_payload_only_links_to_the_dashboard() {
        let json = serde_json::to_value(PushPayload::from(&PushMessage::Test { days_ahead: 7 }))
            .unwrap();
        assert_eq!(json["title"], "Test Notification");
        assert_eq!(json["data"], serde_json::json!({ "url": "/dashboard" }));
    }
}
