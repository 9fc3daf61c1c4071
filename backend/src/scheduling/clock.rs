use chrono::{DateTime, FixedOffset, Local, Utc};

/// The current time as seen by a caller `utc_offset_minutes` east of UTC.
/// Without a usable offset the server's own local offset applies.
pub fn caller_now(utc_offset_minutes: Option<i32>) -> DateTime<FixedOffset> {
    at_offset(Utc::now(), utc_offset_minutes)
}

pub fn at_offset(instant: DateTime<Utc>, utc_offset_minutes: Option<i32>) -> DateTime<FixedOffset> {
    match utc_offset_minutes.and_then(|m| m.checked_mul(60)).and_then(FixedOffset::east_opt) {
        Some(offset) => instant.with_timezone(&offset),
        None => instant.with_timezone(&Local).fixed_offset(),
    }
}
