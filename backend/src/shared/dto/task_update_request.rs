use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{task_priority::TaskPriority, task_status::TaskStatus};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Absent leaves the due date alone; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
    pub notes: Option<String>,
}
