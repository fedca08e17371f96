//! Minute-of-day time parsing and interval arithmetic.
//!
//! Opening hours, template slots, and assignments all express time as
//! "HH:MM" strings on a single-day axis. This module normalizes those
//! strings into minute-of-day integers and provides the interval
//! operations (overlap, clip) the coverage engine is built on.
//!
//! Intervals never cross midnight: `start_minute < end_minute` always
//! holds, and wrap-around input is rejected at construction.

use serde::{Deserialize, Serialize};

use crate::constants::MINUTES_PER_DAY;
use crate::errors::{PlanningError, Result};

/// A half-open interval `[start_minute, end_minute)` on the minute-of-day
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Inclusive start, in minutes since midnight (0..1440).
    pub start_minute: u16,
    /// Exclusive end, in minutes since midnight (0..=1440).
    pub end_minute: u16,
}

impl TimeInterval {
    /// Create an interval, rejecting zero-length and wrap-around input.
    pub fn new(start_minute: u16, end_minute: u16) -> Result<Self> {
        if start_minute >= end_minute || end_minute > MINUTES_PER_DAY {
            return Err(PlanningError::InvalidTimeFormat(format!(
                "invalid interval: start={start_minute} end={end_minute}"
            )));
        }
        Ok(Self { start_minute, end_minute })
    }

    /// Strict-parsing constructor from "HH:MM" endpoints.
    pub fn from_times(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_hhmm(start)?, parse_hhmm(end)?)
    }

    /// Whether two intervals overlap. Touching endpoints do not count:
    /// back-to-back shifts are legal.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minute < other.end_minute && self.end_minute > other.start_minute
    }

    /// Intersect with `bounds`, returning `None` when disjoint (a shared
    /// endpoint alone yields no intersection).
    #[must_use]
    pub fn clip(&self, bounds: &Self) -> Option<Self> {
        let start = self.start_minute.max(bounds.start_minute);
        let end = self.end_minute.min(bounds.end_minute);
        (start < end).then_some(Self { start_minute: start, end_minute: end })
    }

    /// Interval length in minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute - self.start_minute
    }

    /// Format as "HH:MM-HH:MM" for labels and conflict messages.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!("{}-{}", format_minutes(self.start_minute), format_minutes(self.end_minute))
    }
}

/// Parse a strict "HH:MM" string into minutes since midnight.
///
/// Both fields must be exactly two digits, with `0 <= HH <= 23` and
/// `0 <= MM <= 59`. Used on every path that feeds the conflict checker.
pub fn parse_hhmm(input: &str) -> Result<u16> {
    let invalid = || PlanningError::InvalidTimeFormat(input.to_string());

    let (hours_part, minutes_part) = input.split_once(':').ok_or_else(invalid)?;
    if hours_part.len() != 2 || minutes_part.len() != 2 {
        return Err(invalid());
    }

    let hours: u16 = hours_part.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes_part.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Lenient "HH:MM" parse for display-only paths: malformed input maps to
/// midnight instead of failing the whole computation.
#[must_use]
pub fn parse_hhmm_lenient(input: &str) -> u16 {
    parse_hhmm(input).unwrap_or(0)
}

/// Format minutes since midnight back into "HH:MM".
#[must_use]
pub fn format_minutes(minute_of_day: u16) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}
