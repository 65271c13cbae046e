// src/error.rs
use std::fmt;

use crate::engine::types::Bucket;

/// Errors surfaced by every public calendar operation.
///
/// Callers branch on the variant: a missing profile is not the same thing
/// as a profile with zero contributions, and neither is a network failure.
#[derive(thiserror::Error, Debug)]
pub enum CalendarError {
    #[error("The user, {user}, could not be found.")]
    NotFound { user: String },

    #[error("Request for {user} failed: {reason}")]
    Transport { user: String, reason: String },

    #[error("Calendar markup for {user} did not match the expected layout")]
    MalformedMarkup {
        user: String,
        #[source]
        source: MarkupError,
    },

    #[error("Cannot average an empty {bucket} aggregate")]
    EmptyAggregate { bucket: Bucket },
}

impl CalendarError {
    pub fn not_found(user: &str) -> Self {
        Self::NotFound { user: s!(user) }
    }

    pub fn transport(user: &str, reason: impl fmt::Display) -> Self {
        Self::Transport { user: s!(user), reason: reason.to_string() }
    }

    /// Attach the user to an adapter failure. A widget or summary that is
    /// absent altogether means there is no profile to read.
    pub fn from_markup(user: &str, err: MarkupError) -> Self {
        match err.fault {
            MarkupFault::Missing => Self::not_found(user),
            MarkupFault::Malformed => Self::MalformedMarkup { user: s!(user), source: err },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Failure inside the markup adapter. Carries no user; the engine adds it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{step}: {detail}")]
pub struct MarkupError {
    pub step: MarkupStep,
    pub fault: MarkupFault,
    pub detail: String,
}

impl MarkupError {
    pub fn missing(step: MarkupStep, detail: impl Into<String>) -> Self {
        Self { step, fault: MarkupFault::Missing, detail: detail.into() }
    }

    pub fn malformed(step: MarkupStep, detail: impl Into<String>) -> Self {
        Self { step, fault: MarkupFault::Malformed, detail: detail.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupFault {
    Missing,
    Malformed,
}

/// Which extraction step broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupStep {
    CalendarWidget,
    WeekGroups,
    WeekSize,
    DayCount,
    DayDate,
    DayOrder,
    SummaryCounters,
    SummaryValue,
}

impl fmt::Display for MarkupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkupStep::CalendarWidget => "calendar widget",
            MarkupStep::WeekGroups => "week groups",
            MarkupStep::WeekSize => "week size",
            MarkupStep::DayCount => "day count",
            MarkupStep::DayDate => "day date",
            MarkupStep::DayOrder => "day order",
            MarkupStep::SummaryCounters => "summary counters",
            MarkupStep::SummaryValue => "summary value",
        };
        f.write_str(name)
    }
}
