//! # Scraping “specs” module
//!
//! Page-specific readers. Each spec encodes *where the ground truth lives in
//! the HTML* and *how to pull it out*, and nothing else.
//!
//! ## What lives here
//! - **Markup adapters** behind a small trait (`calendar::CalendarMarkup`), so a
//!   layout change on the site means one new impl, not edits across the engine.
//! - **Selector choice and positional quirks** (leading non-week group, leading
//!   non-day cell, fixed order of the summary counters).
//! - **Validation** of attributes the page is expected to carry; a broken
//!   contract is reported with the step that failed.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`).
//! - **Aggregation** (daily/weekly/monthly maps, averages, streaks) – see `engine`.
//!
//! ## Typical call chain
//! ```text
//! engine::Calendar → core::net::PageSource::fetch
//!                  → specs::calendar::parse_doc
//!                  → CalendarMarkup::{extract_year, extract_summary}
//!                  → engine::aggregate
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline HTML snippets.
pub mod calendar;
