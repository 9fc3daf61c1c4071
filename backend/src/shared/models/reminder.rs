use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    reminder_create_request::ReminderCreateRequest,
    reminder_type::{ReminderFrequency, ReminderType},
    reminder_update_request::ReminderUpdateRequest,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    /// Wall-clock time the reminder fires at, as entered ("09:30").
    pub time: String,
    #[serde(rename = "type", default)]
    pub reminder_type: ReminderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<ReminderFrequency>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_task: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    /// Builds a reminder from a request whose required fields were already checked.
    pub fn new(
        user_id: Uuid,
        title: String,
        date: DateTime<Utc>,
        time: String,
        request: ReminderCreateRequest,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            description: request.description,
            date,
            time,
            reminder_type: request.reminder_type.unwrap_or_default(),
            frequency: request.frequency,
            is_completed: false,
            related_task: request.related_task,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(mut self, request: ReminderUpdateRequest) -> Self {
        if let Some(title) = request.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            self.description = Some(description);
        }
        if let Some(date) = request.date {
            self.date = date;
        }
        if let Some(time) = request.time {
            self.time = time;
        }
        if let Some(reminder_type) = request.reminder_type {
            self.reminder_type = reminder_type;
        }
        if let Some(frequency) = request.frequency {
            self.frequency = Some(frequency);
        }
        if let Some(is_completed) = request.is_completed {
            self.is_completed = is_completed;
        }
        if let Some(related_task) = request.related_task {
            self.related_task = Some(related_task);
        }
        self.updated_at = Utc::now();
        self
    }
}
