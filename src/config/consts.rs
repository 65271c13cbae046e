// src/config/consts.rs

// Net config
pub const SCHEME: &str = "https";
pub const HOST: &str = "github.com";
pub const TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("contrib_scrape/", env!("CARGO_PKG_VERSION"));

// Calendar widget (legacy svg layout)
pub const CALENDAR_SVG: &str = "svg.js-calendar-graph-svg";
pub const WEEK_TAG: &str = "g";
pub const ATTR_COUNT: &str = "data-count";
pub const ATTR_DATE: &str = "data-date";
pub const DATE_FMT: &str = "%Y-%m-%d";

// Summary counters: [total, longest streak, current streak]
pub const SUMMARY_COUNTER: &str = "span.contrib-number";
pub const SUMMARY_LEN: usize = 3;

// Real weeks never hold more than this many days
pub const DAYS_PER_WEEK: usize = 7;

pub const MONTH_KEYS: [&str; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];
