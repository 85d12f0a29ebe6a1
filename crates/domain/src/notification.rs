use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};

/// Marks that the owner of a `ClassRecord` has been reminded about the
/// occurrence on `target_date`.
///
/// There is at most one `Notification` per class and target date, the
/// stores enforce this as a uniqueness constraint. The `id` is what the
/// owner later responds to.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ID,
    pub class_id: ID,
    /// The date the class is expected to take place
    pub target_date: NaiveDate,
    pub created: DateTime<Utc>,
}

impl Notification {
    pub fn new(class_id: ID, target_date: NaiveDate, created: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            class_id,
            target_date,
            created,
        }
    }

    /// Client route where the owner answers this notification
    pub fn response_path(&self) -> String {
        format!("/respond/{}", self.id)
    }
}

impl Entity<ID> for Notification {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
