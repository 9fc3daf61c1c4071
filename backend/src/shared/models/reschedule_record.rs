use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a task's reschedule history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRecord {
    pub suggested_date: DateTime<Utc>,
    pub reason: String,
    pub rescheduled_at: DateTime<Utc>,
}
