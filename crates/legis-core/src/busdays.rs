use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// Advance `start` by `n` business days, skipping Saturdays and Sundays.
/// The time-of-day of `start` is preserved.
///
/// Statutory holidays are deliberately not modeled; every deadline in the
/// sanction/veto rules inherits this weekend-only calendar.
pub fn add_business_days(start: DateTime<Utc>, n: u32) -> DateTime<Utc> {
    let mut date = start;
    let mut remaining = n;
    while remaining > 0 {
        date += Duration::days(1);
        if !is_weekend(date) {
            remaining -= 1;
        }
    }
    date
}

/// Signed whole-day difference `a - b`, truncated toward zero.
pub fn difference_in_days(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (a - b).num_days()
}

pub fn is_past(date: DateTime<Utc>) -> bool {
    date < Utc::now()
}

fn is_weekend(date: DateTime<Utc>) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
