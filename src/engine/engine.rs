// src/engine/engine.rs
use crate::config::options::FetchOptions;
use crate::core::net::{HttpRetriever, PageSource};
use crate::engine::aggregate;
use crate::engine::types::*;
use crate::error::{CalendarError, CalendarResult};
use crate::specs::calendar::{CalendarMarkup, LegacyCalendarLayout, parse_doc};

/// Contribution statistics for a profile.
///
/// Every call fetches the page again and derives its answer from scratch;
/// nothing is cached between calls. Use [`Calendar::report`] to get all
/// metrics from one fetch.
pub struct Calendar<S = HttpRetriever, M = LegacyCalendarLayout> {
    source: S,
    markup: M,
}

impl Calendar {
    pub fn new() -> Self {
        Self::with_options(FetchOptions::default())
    }

    pub fn with_options(opts: FetchOptions) -> Self {
        Self::with_source(HttpRetriever::new(opts))
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PageSource> Calendar<S> {
    pub fn with_source(source: S) -> Self {
        Self { source, markup: LegacyCalendarLayout::default() }
    }
}

impl<S: PageSource, M: CalendarMarkup> Calendar<S, M> {
    pub fn with_markup(source: S, markup: M) -> Self {
        Self { source, markup }
    }

    pub fn total_year(&self, user: &str) -> CalendarResult<u32> {
        Ok(self.summary(user)?.total_year)
    }

    pub fn longest_streak(&self, user: &str) -> CalendarResult<u32> {
        Ok(self.summary(user)?.longest_streak)
    }

    pub fn current_streak(&self, user: &str) -> CalendarResult<u32> {
        Ok(self.summary(user)?.current_streak)
    }

    pub fn daily_counts(&self, user: &str) -> CalendarResult<IndexedCounts> {
        Ok(aggregate::daily(&self.year(user)?))
    }

    pub fn weekly_counts(&self, user: &str) -> CalendarResult<IndexedCounts> {
        Ok(aggregate::weekly(&self.year(user)?))
    }

    pub fn monthly_counts(&self, user: &str) -> CalendarResult<MonthlyCounts> {
        Ok(aggregate::monthly(&self.year(user)?))
    }

    pub fn average_day(&self, user: &str) -> CalendarResult<u64> {
        aggregate::average(self.daily_counts(user)?.values(), Bucket::Day)
    }

    pub fn average_week(&self, user: &str) -> CalendarResult<u64> {
        aggregate::average(self.weekly_counts(user)?.values(), Bucket::Week)
    }

    pub fn average_month(&self, user: &str) -> CalendarResult<u64> {
        aggregate::average(self.monthly_counts(user)?.values(), Bucket::Month)
    }

    /// The extracted calendar itself, real weeks and days only.
    pub fn year(&self, user: &str) -> CalendarResult<CalendarYear> {
        let page = self.source.fetch(user)?;
        let doc = parse_doc(&page);
        let year = self
            .markup
            .extract_year(&doc)
            .map_err(|e| CalendarError::from_markup(user, e))?;
        logf!(user, weeks = year.weeks.len(), days = year.day_count(), "calendar read");
        Ok(year)
    }

    pub fn summary(&self, user: &str) -> CalendarResult<Summary> {
        let page = self.source.fetch(user)?;
        let doc = parse_doc(&page);
        self.markup
            .extract_summary(&doc)
            .map_err(|e| CalendarError::from_markup(user, e))
    }

    /// All metrics from a single fetch. Fails as a whole; no partial report.
    pub fn report(&self, user: &str) -> CalendarResult<ContributionReport> {
        let page = self.source.fetch(user)?;
        let doc = parse_doc(&page);
        let to_err = |e| CalendarError::from_markup(user, e);

        let summary = self.markup.extract_summary(&doc).map_err(to_err)?;
        let year = self.markup.extract_year(&doc).map_err(to_err)?;

        let daily = aggregate::daily(&year);
        let weekly = aggregate::weekly(&year);
        let monthly = aggregate::monthly(&year);

        let report = ContributionReport {
            user: s!(user),
            summary,
            first_date: year.first_date(),
            last_date: year.last_date(),
            average_day: aggregate::average(daily.values(), Bucket::Day)?,
            average_week: aggregate::average(weekly.values(), Bucket::Week)?,
            average_month: aggregate::average(monthly.values(), Bucket::Month)?,
            computed_longest_streak: aggregate::longest_streak(&year),
            computed_current_streak: aggregate::current_streak(&year),
            daily,
            weekly,
            monthly,
        };
        logf!(user, total = report.summary.total_year, "report built");
        Ok(report)
    }
}
