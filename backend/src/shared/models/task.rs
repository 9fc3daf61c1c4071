use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    reschedule_record::RescheduleRecord, task_create_request::TaskCreateRequest,
    task_priority::TaskPriority, task_status::TaskStatus, task_update_request::TaskUpdateRequest,
};

pub const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_by_voice: bool,
    #[serde(default)]
    pub reschedule_history: Vec<RescheduleRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Task {
    pub fn new(user_id: Uuid, request: TaskCreateRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: request.title.trim().to_string(),
            description: request.description,
            due_date: request.due_date,
            priority: request.priority,
            status: request.status,
            category: request.category.unwrap_or_else(default_category),
            tags: request.tags,
            attachments: request.attachments,
            notes: request.notes,
            created_by_voice: request.created_by_voice,
            reschedule_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(mut self, request: TaskUpdateRequest) -> Self {
        if let Some(title) = request.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            self.description = Some(description);
        }
        if let Some(due_date) = request.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = request.priority {
            self.priority = priority;
        }
        if let Some(status) = request.status {
            self.status = status;
        }
        if let Some(category) = request.category {
            self.category = category;
        }
        if let Some(tags) = request.tags {
            self.tags = tags;
        }
        if let Some(attachments) = request.attachments {
            self.attachments = attachments;
        }
        if let Some(notes) = request.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Utc::now();
        self
    }

    /// Moves the task to a new due date, puts it back in the pending state and
    /// records the move in its history.
    pub fn reschedule(&mut self, due_date: DateTime<Utc>, reason: String, now: DateTime<Utc>) {
        self.due_date = Some(due_date);
        self.status = TaskStatus::Pending;
        self.reschedule_history.push(RescheduleRecord {
            suggested_date: due_date,
            reason,
            rescheduled_at: now,
        });
        self.updated_at = now;
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_task() -> Task {
        Task::new(
            Uuid::nil(),
            TaskCreateRequest {
                title: "  Water the plants ".into(),
                description: None,
                due_date: None,
                priority: TaskPriority::Low,
                status: TaskStatus::Missed,
                category: None,
                tags: vec![],
                attachments: vec![],
                notes: None,
                created_by_voice: false,
            },
        )
    }

    #[test]
    fn new_task_trims_title_and_defaults_category() {
        let task = sample_task();
        assert_eq!(task.title, "Water the plants");
        assert_eq!(task.category, "general");
        assert!(task.reschedule_history.is_empty());
    }

    #[test]
    fn reschedule_sets_pending_and_appends_history() {
        let mut task = sample_task();
        let due = Utc.with_ymd_and_hms(2026, 3, 4, 15, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();

        task.reschedule(due, "because".into(), now);
        task.reschedule(due, "again".into(), now);

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.reschedule_history.len(), 2);
        assert_eq!(task.reschedule_history[1].reason, "again");
        assert_eq!(task.updated_at, now);
    }

    #[test]
    fn edit_only_touches_given_fields() {
        let task = sample_task().edit(TaskUpdateRequest {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        });
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.priority, TaskPriority::Low);
        assert_eq!(task.title, "Water the plants");
    }

    #[test]
    fn null_due_date_unschedules_and_absent_keeps_it() {
        let due = Utc.with_ymd_and_hms(2026, 3, 4, 15, 0, 0).unwrap();
        let mut task = sample_task();
        task.due_date = Some(due);

        let keep: TaskUpdateRequest = serde_json::from_str(r#"{"title":"Water"}"#).unwrap();
        let task = task.edit(keep);
        assert_eq!(task.due_date, Some(due));

        let clear: TaskUpdateRequest = serde_json::from_str(r#"{"dueDate":null}"#).unwrap();
        let task = task.edit(clear);
        assert_eq!(task.due_date, None);

        let set: TaskUpdateRequest = serde_json::from_str(r#"{"dueDate":"2026-05-01T09:00:00Z"}"#).unwrap();
        let task = task.edit(set);
        assert_eq!(task.due_date, Some(Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap()));
    }

    #[test]
    fn serializes_with_camel_case_and_kebab_status() {
        let mut task = sample_task();
        task.status = TaskStatus::InProgress;
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["priority"], "low");
        assert!(json.get("rescheduleHistory").is_some());
        assert!(json.get("dueDate").is_none());
    }
}
