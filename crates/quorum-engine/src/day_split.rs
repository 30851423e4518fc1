//! Decompose a multi-day span into one bracket per calendar day.
//!
//! An event form that spans several days becomes one candidate bracket per
//! day, each carrying the form's start and end times of day. A heuristic on
//! the form's hours decides whether each day's bracket ends the same day or
//! the next; see [`split_into_days`].

use chrono::{DateTime, Days, Timelike, Utc};

use crate::bracket::TimeBracket;

/// Split the span `[start, end]` into per-day brackets.
///
/// The number of brackets is the calendar-day difference between the two
/// dates: `2024-01-01T22:00` to `2024-01-02T02:00` crosses one midnight and
/// yields one bracket even though the span is under 24 hours. A span that
/// starts and ends on the same date yields nothing, as does a span whose
/// `end` precedes its `start`.
///
/// Bracket `i` starts `i` days after `start`, at `start`'s time of day.
/// Where it ends depends on the shape of the span:
///
/// - Both endpoints at 00:00 (hours and minutes, seconds are ignored): the
///   bracket covers the whole day, ending at the next midnight.
/// - Overnight span (starts at or after noon, ends before noon): the bracket
///   runs into the next day, ending there at `end`'s time of day.
/// - Otherwise: the bracket ends the same day at `end`'s time of day.
pub fn split_into_days(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<TimeBracket> {
    let days_spanned = (end.date_naive() - start.date_naive()).num_days();
    if days_spanned < 1 {
        return Vec::new();
    }

    // Classify the span once; every day's bracket follows the same rule.
    let midnight_aligned =
        start.hour() == 0 && start.minute() == 0 && end.hour() == 0 && end.minute() == 0;
    let overnight = end.hour() < 12 && start.hour() >= 12;
    let ends_next_day = midnight_aligned || overnight;

    (0..days_spanned as u64)
        .filter_map(|offset| {
            let day_start = start.checked_add_days(Days::new(offset))?;
            let end_date = if ends_next_day {
                day_start.date_naive().succ_opt()?
            } else {
                day_start.date_naive()
            };
            Some(TimeBracket {
                start: day_start,
                end: end_date.and_time(end.time()).and_utc(),
            })
        })
        .collect()
}
