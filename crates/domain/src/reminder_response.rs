use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Whether the owner will show up for the reminded occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseValue {
    Attend,
    Skip,
}

impl ResponseValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attend => "attend",
            Self::Skip => "skip",
        }
    }
}

impl Display for ResponseValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidResponseValueError {
    #[error("Response must be \"attend\" or \"skip\", got: {0:?}")]
    Unknown(String),
}

impl FromStr for ResponseValue {
    type Err = InvalidResponseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attend" => Ok(Self::Attend),
            "skip" => Ok(Self::Skip),
            _ => Err(InvalidResponseValueError::Unknown(s.to_string())),
        }
    }
}

/// The answer of a `User` to a `Notification`. Written once, never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderResponse {
    pub id: ID,
    /// Unique, a `Notification` has at most one response
    pub notification_id: ID,
    pub user_id: ID,
    pub class_id: ID,
    pub value: ResponseValue,
    pub responded: DateTime<Utc>,
}

impl Entity<ID> for ReminderResponse {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
