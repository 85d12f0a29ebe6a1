use crate::{
    occurrence::weekday_of,
    shared::entity::{Entity, ID},
    User,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassType {
    #[serde(rename = "one-on-one")]
    OneOnOne,
    #[serde(rename = "group")]
    Group,
}

impl ClassType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneOnOne => "one-on-one",
            Self::Group => "group",
        }
    }
}

impl Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidClassTypeError {
    #[error("Class type: {0} is not one of `one-on-one` or `group`")]
    Unknown(String),
}

impl FromStr for ClassType {
    type Err = InvalidClassTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-on-one" => Ok(Self::OneOnOne),
            "group" => Ok(Self::Group),
            _ => Err(InvalidClassTypeError::Unknown(s.to_string())),
        }
    }
}

/// When a `ClassRecord` takes place.
///
/// Date times are wall clock values in the timezone the service is
/// configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Recurrence {
    /// Takes place once
    #[serde(rename_all = "camelCase")]
    OneTime { date_time: NaiveDateTime },
    /// Takes place every week on `weekday` (Sunday is 0)
    #[serde(rename_all = "camelCase")]
    Recurring { weekday: u32, time_of_day: NaiveTime },
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidRecurrenceError {
    #[error("Weekday: {0} is not in the range 0 (Sunday) to 6 (Saturday)")]
    Weekday(u32),
}

impl Recurrence {
    pub fn weekly(weekday: u32, time_of_day: NaiveTime) -> Result<Self, InvalidRecurrenceError> {
        if weekday > 6 {
            return Err(InvalidRecurrenceError::Weekday(weekday));
        }
        Ok(Self::Recurring {
            weekday,
            time_of_day,
        })
    }

    /// Whether there is an occurrence on the given calendar date
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::OneTime { date_time } => date_time.date() == date,
            Self::Recurring { weekday, .. } => *weekday == weekday_of(date),
        }
    }
}

/// A lesson booked by a `User` that can be cancelled without a penalty
/// until a week before it takes place.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRecord {
    pub id: ID,
    /// The `User` that booked the class and receives its reminders
    pub user_id: ID,
    pub title: String,
    pub class_type: ClassType,
    pub instructor: Option<String>,
    pub notes: Option<String>,
    /// Cancelled classes never receive reminders
    pub cancelled: bool,
    pub recurrence: Recurrence,
}

impl ClassRecord {
    pub fn new(user_id: ID, title: String, class_type: ClassType, recurrence: Recurrence) -> Self {
        Self {
            id: Default::default(),
            user_id,
            title,
            class_type,
            instructor: None,
            notes: None,
            cancelled: false,
            recurrence,
        }
    }

    /// Whether a reminder is due for an occurrence on `date`, not taking
    /// already sent reminders into account
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        !self.cancelled && self.recurrence.occurs_on(date)
    }
}

impl Entity<ID> for ClassRecord {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// A `ClassRecord` selected for a reminder together with its owner
#[derive(Debug, Clone)]
pub struct ReminderCandidate {
    pub class: ClassRecord,
    pub owner: User,
}
