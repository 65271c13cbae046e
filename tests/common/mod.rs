// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use contrib_scrape::{CalendarError, CalendarResult, PageSource};

/// Serves canned pages by username; unknown users are not found.
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    pub fetches: Cell<usize>,
}

impl FixtureSource {
    pub fn with(user: &str, page: String) -> Self {
        let mut s = Self::default();
        s.pages.insert(user.to_string(), page);
        s
    }
}

impl PageSource for FixtureSource {
    fn fetch(&self, user: &str) -> CalendarResult<String> {
        self.fetches.set(self.fetches.get() + 1);
        self.pages
            .get(user)
            .cloned()
            .ok_or_else(|| CalendarError::not_found(user))
    }
}

pub fn rect(count: u32, date: &str) -> String {
    format!(r#"<rect class="day" width="10" height="10" x="14" y="0" data-count="{count}" data-date="{date}"/>"#)
}

/// A week group whose first cell is the skipped leading cell.
pub fn week(lead: u32, days: &[(u32, &str)]) -> String {
    let mut cells = rect(lead, "1970-01-01");
    for (count, date) in days {
        cells.push_str(&rect(*count, date));
    }
    format!(r#"<g transform="translate(0, 0)">{cells}</g>"#)
}

pub fn profile_page(summary: [&str; 3], weeks: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><title>profile</title></head>
<body>
  <div class="js-contribution-graph">
    <svg width="676" height="104" class="js-calendar-graph-svg">
      <g transform="translate(16, 20)" data-hydro-click="">
        <g class="legend"><text x="0" y="0">Less</text><rect width="10" height="10"/></g>
        {weeks}
        <text x="14" y="-7" class="month">Jan</text>
      </g>
    </svg>
  </div>
  <div class="contrib-column contrib-column-first">
    <span class="text-muted">Contributions in the last year</span>
    <span class="contrib-number">{total}</span>
  </div>
  <div class="contrib-column">
    <span class="text-muted">Longest streak</span>
    <span class="contrib-number">{longest}</span>
  </div>
  <div class="contrib-column">
    <span class="text-muted">Current streak</span>
    <span class="contrib-number">{current}</span>
  </div>
</body>
</html>"#,
        weeks = weeks.concat(),
        total = summary[0],
        longest = summary[1],
        current = summary[2],
    )
}

/// Two real weeks: Jan 1-6 counting 1..=6, then Jan 7-12 with a single 1 at the end.
pub fn two_week_page() -> String {
    profile_page(
        ["1,234", "45", "3"],
        &[
            week(21, &[
                (1, "2024-01-01"), (2, "2024-01-02"), (3, "2024-01-03"),
                (4, "2024-01-04"), (5, "2024-01-05"), (6, "2024-01-06"),
            ]),
            week(1, &[
                (0, "2024-01-07"), (0, "2024-01-08"), (0, "2024-01-09"),
                (0, "2024-01-10"), (0, "2024-01-11"), (1, "2024-01-12"),
            ]),
        ],
    )
}
