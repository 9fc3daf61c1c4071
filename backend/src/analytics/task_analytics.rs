use std::collections::BTreeMap;

use serde::Serialize;

use crate::{task::Task, task_priority::TaskPriority, task_status::TaskStatus};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalytics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub in_progress_tasks: usize,
    pub missed_tasks: usize,
    /// Percent of tasks completed, 0 when there are none.
    pub completion_rate: f64,
    pub tasks_by_category: BTreeMap<String, usize>,
    pub tasks_by_priority: BTreeMap<&'static str, usize>,
    /// Percent of tasks moved at least once.
    pub reschedule_rate: f64,
}

pub fn summarize(tasks: &[Task]) -> TaskAnalytics {
    let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();

    let mut tasks_by_category = BTreeMap::new();
    for task in tasks {
        let category = if task.category.trim().is_empty() { "uncategorized" } else { task.category.as_str() };
        *tasks_by_category.entry(category.to_string()).or_insert(0) += 1;
    }

    let tasks_by_priority = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]
        .into_iter()
        .map(|p| (p.as_str(), tasks.iter().filter(|t| t.priority == p).count()))
        .collect();

    let completed_tasks = count(TaskStatus::Completed);
    let rescheduled = tasks.iter().filter(|t| !t.reschedule_history.is_empty()).count();

    TaskAnalytics {
        total_tasks: tasks.len(),
        completed_tasks,
        pending_tasks: count(TaskStatus::Pending),
        in_progress_tasks: count(TaskStatus::InProgress),
        missed_tasks: count(TaskStatus::Missed),
        completion_rate: percent(completed_tasks, tasks.len()),
        tasks_by_category,
        tasks_by_priority,
        reschedule_rate: percent(rescheduled, tasks.len()),
    }
}

pub(crate) fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_create_request::TaskCreateRequest;
    use chrono::Utc;
    use uuid::Uuid;

    fn task(status: TaskStatus, priority: TaskPriority, category: Option<&str>) -> Task {
        Task::new(
            Uuid::nil(),
            TaskCreateRequest {
                title: "t".into(),
                description: None,
                due_date: None,
                priority,
                status,
                category: category.map(str::to_string),
                tags: vec![],
                attachments: vec![],
                notes: None,
                created_by_voice: false,
            },
        )
    }

    #[test]
    fn empty_list_has_zero_rates() {
        let a = summarize(&[]);
        assert_eq!(a.total_tasks, 0);
        assert_eq!(a.completion_rate, 0.0);
        assert_eq!(a.reschedule_rate, 0.0);
        assert_eq!(a.tasks_by_priority.len(), 3);
        assert_eq!(a.tasks_by_priority["high"], 0);
    }

    #[test]
    fn counts_by_status_category_and_priority() {
        let mut moved = task(TaskStatus::Pending, TaskPriority::High, Some("work"));
        moved.reschedule(Utc::now(), "clear day".into(), Utc::now());
        let tasks = vec![
            task(TaskStatus::Completed, TaskPriority::Low, Some("home")),
            task(TaskStatus::Completed, TaskPriority::High, Some("work")),
            task(TaskStatus::InProgress, TaskPriority::Medium, None),
            task(TaskStatus::Missed, TaskPriority::Medium, Some("")),
            moved,
        ];

        let a = summarize(&tasks);
        assert_eq!(a.total_tasks, 5);
        assert_eq!(a.completed_tasks, 2);
        assert_eq!(a.pending_tasks, 1);
        assert_eq!(a.in_progress_tasks, 1);
        assert_eq!(a.missed_tasks, 1);
        assert_eq!(a.completion_rate, 40.0);
        assert_eq!(a.reschedule_rate, 20.0);
        assert_eq!(a.tasks_by_category["work"], 2);
        assert_eq!(a.tasks_by_category["general"], 1);
        assert_eq!(a.tasks_by_category["uncategorized"], 1);
        assert_eq!(a.tasks_by_priority["medium"], 2);
    }
}
