// src/lib.rs
//! Contribution statistics scraped from a public profile page.
//!
//! ```no_run
//! let total = contrib_scrape::total_year("octocat")?;
//! let weekly = contrib_scrape::weekly_counts("octocat")?;
//! # Ok::<(), contrib_scrape::CalendarError>(())
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::config::options::FetchOptions;
pub use crate::core::net::{HttpRetriever, PageSource};
pub use crate::engine::Calendar;
pub use crate::engine::types::{
    Bucket, CalendarYear, ContributionReport, Day, IndexedCounts, MonthlyCounts, Summary, Week,
};
pub use crate::error::{CalendarError, CalendarResult, MarkupError, MarkupStep};
pub use crate::specs::calendar::{CalendarMarkup, LegacyCalendarLayout};

// Per-metric shorthands against the default host.

pub fn total_year(user: &str) -> CalendarResult<u32> {
    Calendar::new().total_year(user)
}

pub fn longest_streak(user: &str) -> CalendarResult<u32> {
    Calendar::new().longest_streak(user)
}

pub fn current_streak(user: &str) -> CalendarResult<u32> {
    Calendar::new().current_streak(user)
}

pub fn daily_counts(user: &str) -> CalendarResult<IndexedCounts> {
    Calendar::new().daily_counts(user)
}

pub fn weekly_counts(user: &str) -> CalendarResult<IndexedCounts> {
    Calendar::new().weekly_counts(user)
}

pub fn monthly_counts(user: &str) -> CalendarResult<MonthlyCounts> {
    Calendar::new().monthly_counts(user)
}

pub fn average_day(user: &str) -> CalendarResult<u64> {
    Calendar::new().average_day(user)
}

pub fn average_week(user: &str) -> CalendarResult<u64> {
    Calendar::new().average_week(user)
}

pub fn average_month(user: &str) -> CalendarResult<u64> {
    Calendar::new().average_month(user)
}
