use chrono::NaiveDate;

/// Aggregated outcome of one reminder run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderRunSummary {
    pub target_date: Option<NaiveDate>,
    /// Classes selected as due for a reminder
    pub candidates: usize,
    /// Candidates for which a `Notification` was created by this run
    pub dispatched: usize,
    /// Candidates another run had already created a `Notification` for
    pub already_handled: usize,
    /// Candidates that could not be recorded because of a storage failure
    pub storage_failures: usize,
    pub delivered: usize,
    /// Deliveries rejected because the subscription no longer exists
    pub gone: usize,
    pub failed: usize,
}
