mod class;
mod notification;
mod occurrence;
mod push;
mod reminder_response;
mod reminder_run;
mod shared;
mod user;

pub use class::{
    ClassRecord, ClassType, InvalidClassTypeError, InvalidRecurrenceError, Recurrence,
    ReminderCandidate,
};
pub use notification::Notification;
pub use occurrence::{format_day, target_date, weekday_of, REMINDER_HORIZON_DAYS};
pub use push::{
    ClassReminderMessage, InvalidSubscriptionError, PushKeys, PushMessage, PushSubscription,
};
pub use reminder_response::{InvalidResponseValueError, ReminderResponse, ResponseValue};
pub use reminder_run::ReminderRunSummary;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::User;

pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
