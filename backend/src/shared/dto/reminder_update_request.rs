use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::reminder_type::{ReminderFrequency, ReminderType};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub reminder_type: Option<ReminderType>,
    pub frequency: Option<ReminderFrequency>,
    pub is_completed: Option<bool>,
    pub related_task: Option<Uuid>,
}
