use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{analytics::task_analytics::percent, reminder::Reminder};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderAnalytics {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    pub overdue: usize,
    pub completion_rate: f64,
    pub by_type: BTreeMap<&'static str, usize>,
}

pub fn summarize(reminders: &[Reminder], now: DateTime<Utc>) -> ReminderAnalytics {
    let open = || reminders.iter().filter(|r| !r.is_completed);
    let completed = reminders.len() - open().count();

    let mut by_type = BTreeMap::new();
    for reminder in reminders {
        *by_type.entry(reminder.reminder_type.as_str()).or_insert(0) += 1;
    }

    ReminderAnalytics {
        total: reminders.len(),
        completed,
        upcoming: open().filter(|r| r.date > now).count(),
        overdue: open().filter(|r| r.date < now).count(),
        completion_rate: percent(completed, reminders.len()),
        by_type,
    }
}
