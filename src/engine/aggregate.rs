// src/engine/aggregate.rs
// Groupings over the extracted day sequence. Pure functions; no I/O.

use chrono::Datelike;

use crate::config::consts::MONTH_KEYS;
use crate::engine::types::*;
use crate::error::{CalendarError, CalendarResult};

/// Day index → count, index 0 is the earliest day.
pub fn daily(year: &CalendarYear) -> IndexedCounts {
    year.days().enumerate().map(|(i, d)| (i, u64::from(d.count))).collect()
}

/// Week index → sum of that week's days.
pub fn weekly(year: &CalendarYear) -> IndexedCounts {
    year.weeks.iter().enumerate().map(|(i, w)| (i, w.total())).collect()
}

/// "01".."12" → sum of days in that month. Always twelve keys; a month seen
/// at both ends of the window is summed across both stretches.
pub fn monthly(year: &CalendarYear) -> MonthlyCounts {
    let mut out: MonthlyCounts = MONTH_KEYS.iter().map(|k| (s!(*k), 0)).collect();
    for day in year.days() {
        let key = MONTH_KEYS[day.date.month0() as usize];
        if let Some(slot) = out.get_mut(key) {
            *slot += u64::from(day.count);
        }
    }
    out
}

/// `floor(sum / buckets)`. Zero buckets is an error, never a silent 0.
pub fn average<'a, I>(values: I, bucket: Bucket) -> CalendarResult<u64>
where
    I: IntoIterator<Item = &'a u64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0u128, 0u128), |(s, n), v| (s + u128::from(*v), n + 1));
    if n == 0 {
        return Err(CalendarError::EmptyAggregate { bucket });
    }
    // mean of u64 values fits in u64
    Ok((sum / n) as u64)
}

/// Longest run of consecutive days with a non-zero count.
pub fn longest_streak(year: &CalendarYear) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    for day in year.days() {
        if day.count > 0 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Run of non-zero days ending at the most recent day.
pub fn current_streak(year: &CalendarYear) -> u32 {
    year.weeks
        .iter()
        .rev()
        .flat_map(|w| w.days.iter().rev())
        .take_while(|d| d.count > 0)
        .count() as u32
}
