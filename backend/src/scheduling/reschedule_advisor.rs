//! Suggests a new due date for a missed or overdue task.
//!
//! The next seven calendar days (today included) are scored by how much
//! pending work is already due on them, weighted by priority. The least
//! busy day wins, earliest first on ties, and the hour comes from the
//! priority of the task being moved.
//!
//! Everything here is a pure function of the task snapshot and the
//! reference time handed in. Day boundaries are those of the reference
//! time's own time zone.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::task::Task;

/// Number of day buckets in the scheduling window.
pub const WINDOW_DAYS: usize = 7;

const FALLBACK_HOUR: u32 = 9;
pub const FALLBACK_REASON: &str = "Couldn't find original task, rescheduled for tomorrow morning";

#[derive(Debug, Clone)]
pub struct RescheduleSuggestion<Tz: TimeZone> {
    pub suggested_due_date: DateTime<Tz>,
    pub reason: String,
}

impl<Tz: TimeZone> RescheduleSuggestion<Tz> {
    pub fn to_utc(&self) -> RescheduleSuggestion<Utc> {
        RescheduleSuggestion {
            suggested_due_date: self.suggested_due_date.with_timezone(&Utc),
            reason: self.reason.clone(),
        }
    }
}

impl<Tz: TimeZone> PartialEq for RescheduleSuggestion<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.suggested_due_date == other.suggested_due_date && self.reason == other.reason
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DayBucket {
    date: NaiveDate,
    score: u32,
}

/// Picks a new due date for `target_task_id` given every known task.
///
/// Never fails: a target missing from `all_tasks` gets tomorrow at 09:00.
pub fn suggest<Tz: TimeZone>(
    target_task_id: Uuid,
    all_tasks: &[Task],
    reference_now: &DateTime<Tz>,
) -> RescheduleSuggestion<Tz> {
    let tz = reference_now.timezone();
    let today = reference_now.date_naive();

    let Some(target) = all_tasks.iter().find(|t| t.id == target_task_id) else {
        let tomorrow = add_days(today, 1);
        return RescheduleSuggestion {
            suggested_due_date: at_hour(&tz, tomorrow, FALLBACK_HOUR),
            reason: FALLBACK_REASON.to_string(),
        };
    };

    let mut buckets: [DayBucket; WINDOW_DAYS] = std::array::from_fn(|i| DayBucket {
        date: add_days(today, i as u64),
        score: 0,
    });

    let pending_pool = all_tasks
        .iter()
        .filter(|t| t.id != target_task_id && !t.is_completed())
        .filter_map(|t| t.due_date.map(|due| (due, t.priority)));

    for (due, priority) in pending_pool {
        let due_day = due.with_timezone(&tz).date_naive();
        let offset = due_day.signed_duration_since(today).num_days();
        if (0..WINDOW_DAYS as i64).contains(&offset) {
            buckets[offset as usize].score += priority.density_weight();
        }
    }

    let best = least_busy(&buckets);
    let hour = target.priority.reschedule_hour();
    let suggested_due_date = at_hour(&tz, best.date, hour);

    RescheduleSuggestion {
        reason: explain(best, hour),
        suggested_due_date,
    }
}

/// First bucket with the lowest score.
fn least_busy(buckets: &[DayBucket; WINDOW_DAYS]) -> DayBucket {
    let mut best = buckets[0];
    for bucket in &buckets[1..] {
        if bucket.score < best.score {
            best = *bucket;
        }
    }
    best
}

fn explain(day: DayBucket, hour: u32) -> String {
    let clause = match day.score {
        0 => "when your schedule appears to be clear.",
        1..=2 => "when you have few other commitments.",
        _ => "which seems to be the least busy time in your schedule.",
    };
    format!(
        "Rescheduled to {} at {} {}",
        day.date.format("%A"),
        format_hour(hour),
        clause
    )
}

/// Hours past noon get a PM suffix; everything else, noon included, reads AM.
pub fn format_hour(hour: u32) -> String {
    if hour > 12 {
        format!("{}PM", hour - 12)
    } else {
        format!("{hour}AM")
    }
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// `date` at `hour`:00:00.000 local time. A wall-clock time skipped by a DST
/// jump is read as UTC instead.
fn at_hour<Tz: TimeZone>(tz: &Tz, date: NaiveDate, hour: u32) -> DateTime<Tz> {
    let naive = date.and_hms_opt(hour, 0, 0).unwrap_or_else(|| date.and_time(Default::default()));
    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}
