// src/specs/calendar.rs
//! Markup adapter for the profile contribution calendar.
//!
//! Purpose:
//! - Turn the calendar widget into a clean `CalendarYear` (real weeks, real days).
//! - Read the three summary counters `[total, longest streak, current streak]`.
//!
//! Layout contract (legacy svg calendar):
//! ```text
//! <svg class="js-calendar-graph-svg">
//!   <g>                        container
//!     <g>…</g>                 leading group, not a week   (skipped)
//!     <g>                      week 0
//!       <rect data-count=… data-date=…/>   leading cell  (skipped)
//!       <rect data-count="1" data-date="2024-01-01"/>
//!       …
//!     </g>
//!     …
//!   </g>
//! </svg>
//! <span class="contrib-number">1,234</span> ×3
//! ```
//!
//! The positional skips live here and nowhere else. If the page layout
//! changes, write a new `CalendarMarkup` impl; the engine does not care.

use chrono::NaiveDate;
use scraper::{ElementRef, Html};

use crate::config::consts::*;
use crate::core::html::{attr, children_named, element_children, first, select_all, text_of};
use crate::core::sanitize::parse_separated_int;
use crate::engine::types::{CalendarYear, Day, Summary, Week};
use crate::error::{MarkupError, MarkupStep};

/// Stable interface between page markup and the engine.
pub trait CalendarMarkup {
    /// Real weeks in chronological order, each with its real days.
    fn extract_year(&self, doc: &Html) -> Result<CalendarYear, MarkupError>;

    /// The summary triple in page order.
    fn extract_summary(&self, doc: &Html) -> Result<Summary, MarkupError>;
}

/// The svg-based calendar layout (`svg.js-calendar-graph-svg`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyCalendarLayout {
    /// Groups before the first real week.
    pub skip_leading_groups: usize,
    /// Cells at the start of every week group that are not days.
    pub skip_leading_cells: usize,
}

impl Default for LegacyCalendarLayout {
    fn default() -> Self {
        Self { skip_leading_groups: 1, skip_leading_cells: 1 }
    }
}

impl CalendarMarkup for LegacyCalendarLayout {
    fn extract_year(&self, doc: &Html) -> Result<CalendarYear, MarkupError> {
        let svg = first(doc, CALENDAR_SVG).ok_or_else(|| {
            MarkupError::missing(MarkupStep::CalendarWidget, format!("no `{CALENDAR_SVG}` element"))
        })?;
        let container = children_named(svg, WEEK_TAG).next().ok_or_else(|| {
            MarkupError::missing(MarkupStep::WeekGroups, "calendar has no group container")
        })?;

        let mut weeks = Vec::new();
        let mut prev: Option<NaiveDate> = None;

        for (wi, group) in children_named(container, WEEK_TAG).skip(self.skip_leading_groups).enumerate() {
            let week = self.read_week(wi, group, &mut prev)?;
            weeks.push(week);
        }

        logd!(weeks = weeks.len(), "calendar extracted");
        Ok(CalendarYear { weeks })
    }

    fn extract_summary(&self, doc: &Html) -> Result<Summary, MarkupError> {
        let counters = select_all(doc, SUMMARY_COUNTER);
        if counters.len() < SUMMARY_LEN {
            return Err(MarkupError::missing(
                MarkupStep::SummaryCounters,
                format!("expected {SUMMARY_LEN} `{SUMMARY_COUNTER}` elements, found {}", counters.len()),
            ));
        }

        let read = |idx: usize, label: &str| -> Result<u32, MarkupError> {
            let text = text_of(counters[idx]);
            parse_separated_int(&text).ok_or_else(|| {
                MarkupError::malformed(MarkupStep::SummaryValue, format!("{label}: {text:?}"))
            })
        };

        Ok(Summary {
            total_year: read(0, "total")?,
            longest_streak: read(1, "longest streak")?,
            current_streak: read(2, "current streak")?,
        })
    }
}

impl LegacyCalendarLayout {
    fn read_week(
        &self,
        wi: usize,
        group: ElementRef<'_>,
        prev: &mut Option<NaiveDate>,
    ) -> Result<Week, MarkupError> {
        let mut days = Vec::with_capacity(DAYS_PER_WEEK);

        for (ci, cell) in element_children(group).enumerate().skip(self.skip_leading_cells) {
            let day = read_day(wi, ci, cell)?;
            if let Some(p) = *prev {
                if day.date <= p {
                    return Err(MarkupError::malformed(
                        MarkupStep::DayOrder,
                        format!("week {wi}, cell {ci}: {} does not follow {p}", day.date),
                    ));
                }
            }
            *prev = Some(day.date);
            days.push(day);
        }

        if days.len() > DAYS_PER_WEEK {
            return Err(MarkupError::malformed(
                MarkupStep::WeekSize,
                format!("week {wi} holds {} days", days.len()),
            ));
        }
        Ok(Week { days })
    }
}

fn read_day(wi: usize, ci: usize, cell: ElementRef<'_>) -> Result<Day, MarkupError> {
    let raw_count = attr(cell, ATTR_COUNT).ok_or_else(|| {
        MarkupError::malformed(MarkupStep::DayCount, format!("week {wi}, cell {ci}: no {ATTR_COUNT}"))
    })?;
    let count: u32 = raw_count.trim().parse().map_err(|_| {
        MarkupError::malformed(MarkupStep::DayCount, format!("week {wi}, cell {ci}: {raw_count:?}"))
    })?;

    let raw_date = attr(cell, ATTR_DATE).ok_or_else(|| {
        MarkupError::malformed(MarkupStep::DayDate, format!("week {wi}, cell {ci}: no {ATTR_DATE}"))
    })?;
    let date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FMT).map_err(|_| {
        MarkupError::malformed(MarkupStep::DayDate, format!("week {wi}, cell {ci}: {raw_date:?}"))
    })?;

    Ok(Day { date, count })
}

/// Parse a raw page once; both extraction calls share the result.
pub fn parse_doc(page: &str) -> Html {
    Html::parse_document(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkupFault;

    fn rect(count: &str, date: &str) -> String {
        format!(r#"<rect class="day" width="10" height="10" data-count="{count}" data-date="{date}"></rect>"#)
    }

    fn page(groups: &[String]) -> String {
        format!(
            r#"<html><body>
            <svg width="676" height="104" class="js-calendar-graph-svg">
              <g transform="translate(16, 20)">{}</g>
            </svg>
            </body></html>"#,
            groups.concat()
        )
    }

    fn group(cells: &[String]) -> String {
        format!(r#"<g transform="translate(0, 0)">{}</g>"#, cells.concat())
    }

    fn legend() -> String {
        r#"<g class="legend"><rect width="10" height="10"></rect></g>"#.to_string()
    }

    #[test]
    fn skips_leading_group_and_cell() {
        let doc = parse_doc(&page(&[
            legend(),
            group(&[
                rect("99", "2023-12-31"),
                rect("4", "2024-01-01"),
                rect("0", "2024-01-02"),
            ]),
            group(&[rect("99", "2024-01-02"), rect("7", "2024-01-03")]),
        ]));

        let year = LegacyCalendarLayout::default().extract_year(&doc).unwrap();
        assert_eq!(year.weeks.len(), 2);
        assert_eq!(year.weeks[0].days.len(), 2);
        assert_eq!(year.weeks[0].days[0].count, 4);
        assert_eq!(year.weeks[1].days[0].count, 7);
        assert_eq!(year.first_date(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(year.last_date(), NaiveDate::from_ymd_opt(2024, 1, 3));
    }

    #[test]
    fn zero_skip_layout_reads_every_cell() {
        let doc = parse_doc(&page(&[group(&[rect("1", "2024-03-01"), rect("2", "2024-03-02")])]));
        let layout = LegacyCalendarLayout { skip_leading_groups: 0, skip_leading_cells: 0 };
        let year = layout.extract_year(&doc).unwrap();
        assert_eq!(year.day_count(), 2);
        assert_eq!(year.total(), 3);
    }

    #[test]
    fn missing_widget_is_missing() {
        let doc = parse_doc("<html><body><p>Not Found</p></body></html>");
        let err = LegacyCalendarLayout::default().extract_year(&doc).unwrap_err();
        assert_eq!(err.step, MarkupStep::CalendarWidget);
        assert_eq!(err.fault, MarkupFault::Missing);
    }

    #[test]
    fn non_numeric_count_is_malformed() {
        let doc = parse_doc(&page(&[
            legend(),
            group(&[rect("0", "2024-01-01"), rect("lots", "2024-01-02")]),
        ]));
        let err = LegacyCalendarLayout::default().extract_year(&doc).unwrap_err();
        assert_eq!(err.step, MarkupStep::DayCount);
        assert_eq!(err.fault, MarkupFault::Malformed);
        assert!(err.detail.contains("week 0, cell 1"));
    }

    #[test]
    fn bad_or_absent_date_is_malformed() {
        let doc = parse_doc(&page(&[
            legend(),
            group(&[rect("0", "2024-01-01"), rect("1", "01/02/2024")]),
        ]));
        let err = LegacyCalendarLayout::default().extract_year(&doc).unwrap_err();
        assert_eq!(err.step, MarkupStep::DayDate);

        let doc = parse_doc(&page(&[
            legend(),
            group(&[rect("0", "2024-01-01"), r#"<rect data-count="1"></rect>"#.to_string()]),
        ]));
        let err = LegacyCalendarLayout::default().extract_year(&doc).unwrap_err();
        assert_eq!(err.step, MarkupStep::DayDate);
        assert!(err.detail.contains("no data-date"));
    }

    #[test]
    fn out_of_order_dates_are_malformed() {
        let doc = parse_doc(&page(&[
            legend(),
            group(&[rect("0", "x"), rect("1", "2024-01-05")]),
            group(&[rect("0", "x"), rect("1", "2024-01-04")]),
        ]));
        let err = LegacyCalendarLayout::default().extract_year(&doc).unwrap_err();
        assert_eq!(err.step, MarkupStep::DayOrder);
    }

    #[test]
    fn oversized_week_is_malformed() {
        let mut cells = vec![rect("0", "x")];
        for d in 1..=8 {
            cells.push(rect("1", &format!("2024-02-{d:02}")));
        }
        let doc = parse_doc(&page(&[legend(), group(&cells)]));
        let err = LegacyCalendarLayout::default().extract_year(&doc).unwrap_err();
        assert_eq!(err.step, MarkupStep::WeekSize);
    }

    #[test]
    fn summary_reads_three_counters_in_order() {
        let doc = parse_doc(
            r#"<div class="contrib-column">
                 <span class="contrib-number">1,234 total</span>
               </div>
               <div class="contrib-column"><span class="contrib-number">45 days</span></div>
               <div class="contrib-column"><span class="contrib-number">3 days</span></div>"#,
        );
        let summary = LegacyCalendarLayout::default().extract_summary(&doc).unwrap();
        assert_eq!(summary, Summary { total_year: 1234, longest_streak: 45, current_streak: 3 });
    }

    #[test]
    fn summary_short_of_counters_is_missing() {
        let doc = parse_doc(r#"<span class="contrib-number">12</span><span class="contrib-number">1</span>"#);
        let err = LegacyCalendarLayout::default().extract_summary(&doc).unwrap_err();
        assert_eq!(err.step, MarkupStep::SummaryCounters);
        assert_eq!(err.fault, MarkupFault::Missing);
    }

    #[test]
    fn summary_text_without_digits_is_malformed() {
        let doc = parse_doc(
            r#"<span class="contrib-number">12</span>
               <span class="contrib-number">n/a</span>
               <span class="contrib-number">1</span>"#,
        );
        let err = LegacyCalendarLayout::default().extract_summary(&doc).unwrap_err();
        assert_eq!(err.step, MarkupStep::SummaryValue);
        assert!(err.detail.starts_with("longest streak"));
    }
}
