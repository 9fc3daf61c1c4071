//! Free-text task assistant.
//!
//! Turns chat messages like "reschedule my missed tasks" or "reschedule 2"
//! into replies backed by the reschedule advisor. Interpretation is pure;
//! when the reply asks for a task to be moved, the caller persists it.

use std::{fmt::Display, sync::OnceLock};

use chrono::{DateTime, TimeZone};
use regex::Regex;
use uuid::Uuid;

use crate::{
    scheduling::reschedule_advisor::{self, RescheduleSuggestion},
    task::Task,
};

/// Overdue lists longer than this are summarized instead of enumerated.
const MAX_LISTED_OVERDUE: usize = 3;

const HELP: &str = "I can help you reschedule missed tasks or check your task progress. \
Try asking me something like 'reschedule my missed tasks' or 'what's my task status?'";

#[derive(Debug, Clone)]
pub struct PlannedReschedule<Tz: TimeZone> {
    pub task_id: Uuid,
    pub suggestion: RescheduleSuggestion<Tz>,
}

#[derive(Debug, Clone)]
pub struct AssistantReply<Tz: TimeZone> {
    pub message: String,
    /// Set when the message asked for a specific task to be moved.
    pub reschedule: Option<PlannedReschedule<Tz>>,
}

impl<Tz: TimeZone> AssistantReply<Tz> {
    fn say(message: impl Into<String>) -> Self {
        Self { message: message.into(), reschedule: None }
    }
}

enum Target<'a> {
    Number(&'a str),
    Quoted(&'a str),
    Words(&'a str),
}

fn reschedule_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"reschedule\s+(?:task\s+)?(\d+|"[^"]+"|'[^']+'|[a-z0-9 ]+)"#)
            .expect("reschedule pattern is valid")
    })
}

fn parse_target(text: &str) -> Option<Target<'_>> {
    let ident = reschedule_pattern().captures(text)?.get(1)?.as_str();
    if ident.chars().all(|c| c.is_ascii_digit()) {
        return Some(Target::Number(ident));
    }
    let unquoted = ident.trim_matches(|c| c == '"' || c == '\'');
    if unquoted.len() != ident.len() {
        Some(Target::Quoted(unquoted))
    } else {
        Some(ident.trim()).filter(|words| !words.is_empty()).map(Target::Words)
    }
}

/// Overdue: due before `now` and not completed.
pub fn is_overdue<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> bool {
    !task.is_completed() && task.due_date.is_some_and(|due| due < *now)
}

/// "Sat, Oct 17, 9:00 AM"
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%a, %b %-d, %-I:%M %p").to_string()
}

pub fn respond<Tz: TimeZone>(message: &str, tasks: &[Task], now: &DateTime<Tz>) -> AssistantReply<Tz>
where
    Tz::Offset: Display,
{
    let text = message.trim().to_lowercase();
    let overdue: Vec<&Task> = tasks.iter().filter(|t| is_overdue(t, now)).collect();

    match parse_target(&text) {
        Some(Target::Number(digits)) => {
            return match digits.parse::<usize>().ok().filter(|n| (1..=overdue.len()).contains(n)) {
                Some(n) => reschedule(overdue[n - 1], tasks, now),
                None => AssistantReply::say(format!(
                    "I couldn't find task number {}. Please try again with a valid task number.",
                    digits.parse::<u64>().map_or(digits.to_string(), |n| n.to_string())
                )),
            };
        }
        Some(Target::Quoted(title)) => {
            return match find_by_title(&overdue, title) {
                Some(task) => reschedule(task, tasks, now),
                None => AssistantReply::say(format!(
                    "I couldn't find a task with \"{title}\" in the title. Please try again."
                )),
            };
        }
        Some(Target::Words(title)) => {
            if let Some(task) = find_by_title(&overdue, title) {
                return reschedule(task, tasks, now);
            }
        }
        None => {}
    }

    if ["reschedule", "missed", "overdue"].iter().any(|k| text.contains(k)) {
        return AssistantReply::say(overview(&overdue, tasks, now));
    }

    if ["status", "progress", "how am i doing"].iter().any(|k| text.contains(k)) {
        return AssistantReply::say(progress(tasks));
    }

    AssistantReply::say(HELP)
}

fn find_by_title<'a>(overdue: &[&'a Task], needle: &str) -> Option<&'a Task> {
    let needle = needle.to_lowercase();
    overdue.iter().copied().find(|t| t.title.to_lowercase().contains(&needle))
}

fn reschedule<Tz: TimeZone>(task: &Task, tasks: &[Task], now: &DateTime<Tz>) -> AssistantReply<Tz>
where
    Tz::Offset: Display,
{
    let suggestion = reschedule_advisor::suggest(task.id, tasks, now);
    AssistantReply {
        message: format!(
            "I've rescheduled \"{}\" to {}. {}",
            task.title,
            format_date(&suggestion.suggested_due_date),
            suggestion.reason
        ),
        reschedule: Some(PlannedReschedule { task_id: task.id, suggestion }),
    }
}

fn overview<Tz: TimeZone>(overdue: &[&Task], tasks: &[Task], now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    if overdue.is_empty() {
        return "You don't have any overdue tasks that need rescheduling. Good job staying on top of things!"
            .to_string();
    }

    let count = overdue.len();
    let mut response = format!(
        "You have {count} overdue task{}. ",
        if count > 1 { "s" } else { "" }
    );

    if count > MAX_LISTED_OVERDUE {
        response.push_str(
            "Would you like me to suggest new times for them? Let me know which task you want to reschedule first.",
        );
        return response;
    }

    response.push_str("Here are your overdue tasks:\n\n");
    for (index, task) in overdue.iter().enumerate() {
        let suggestion = reschedule_advisor::suggest(task.id, tasks, now);
        let due = task
            .due_date
            .map(|d| format_date(&d.with_timezone(&now.timezone())))
            .unwrap_or_default();
        response.push_str(&format!("{}. \"{}\" (due {due})\n", index + 1, task.title));
        response.push_str(&format!(
            "   Suggestion: Reschedule to {} - {}\n\n",
            format_date(&suggestion.suggested_due_date),
            suggestion.reason
        ));
    }
    response.push_str(
        "Would you like me to automatically reschedule any of these tasks? Just let me know which one by number or title.",
    );
    response
}

fn progress(tasks: &[Task]) -> String {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    let rate = if total > 0 {
        (completed as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    let verdict = if rate >= 75 {
        "You're doing great! Keep up the good work!"
    } else if rate >= 50 {
        "You're making good progress. Keep going!"
    } else {
        "You still have tasks to complete. Is there any way I can help you prioritize?"
    };

    format!(
        "Here's your current progress:\n\nTotal Tasks: {total}\nCompleted: {completed}\nPending: {}\nCompletion Rate: {rate}%\n\n{verdict}",
        total - completed
    )
}
