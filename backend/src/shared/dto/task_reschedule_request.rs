use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of `POST /api/tasks/:id/reschedule`. Both fields empty means
/// "take the advisor's suggestion".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRescheduleRequest {
    pub due_date: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

/// Query string accepted by the reschedule endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleQuery {
    pub utc_offset_minutes: Option<i32>,
}
