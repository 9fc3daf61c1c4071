use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::task::Task;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleSuggestionResponse {
    pub task_id: uuid::Uuid,
    pub suggested_due_date: DateTime<Utc>,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRescheduleResponse {
    pub task: Task,
    pub suggested_due_date: DateTime<Utc>,
    pub reason: String,
}
