// src/engine/types.rs
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// One calendar cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub count: u32,
}

/// One column of the grid: up to seven days, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Week {
    pub days: Vec<Day>,
}

impl Week {
    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| u64::from(d.count)).sum()
    }
}

/// The trailing year as rendered by the page, real weeks only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CalendarYear {
    pub weeks: Vec<Week>,
}

impl CalendarYear {
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }

    pub fn total(&self) -> u64 {
        self.days().map(|d| u64::from(d.count)).sum()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days().next().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days().last().map(|d| d.date)
    }
}

/// The three counters printed above the calendar, in page order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_year: u32,
    pub longest_streak: u32,
    pub current_streak: u32,
}

// Sums of u32 cells; u64 so a week or month of large counts cannot wrap.
pub type IndexedCounts = BTreeMap<usize, u64>;
pub type MonthlyCounts = BTreeMap<String, u64>;

/// Aggregate grouping an average is taken over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Bucket {
    Day,
    Week,
    Month,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bucket::Day => "daily",
            Bucket::Week => "weekly",
            Bucket::Month => "monthly",
        })
    }
}

/// Everything derivable from a single fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContributionReport {
    pub user: String,
    pub summary: Summary,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub daily: IndexedCounts,
    pub weekly: IndexedCounts,
    pub monthly: MonthlyCounts,
    pub average_day: u64,
    pub average_week: u64,
    pub average_month: u64,
    /// Streaks recomputed from the day cells, next to the page's own counters.
    pub computed_longest_streak: u32,
    pub computed_current_streak: u32,
}
