//! Derived view data: coverage slots, timeline segments, coverage stats.
//!
//! Everything in this module is a pure projection of the planning session.
//! Nothing here is persisted or mutated in place; the engine rebuilds
//! these records on every change so the rendering layer always sees a
//! consistent snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::errors::Result;
use crate::types::planning::ResourceAssignment;
use crate::utils::time::TimeInterval;

/// A template slot resolved onto a concrete calendar day, together with
/// the resources currently assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CoverageSlot {
    pub day: NaiveDate,
    pub template_id: String,
    pub template_name: String,
    pub template_color: String,
    pub slot_id: String,
    pub slot_label: String,
    /// "HH:MM" start of the slot window.
    pub start_time: String,
    /// "HH:MM" end of the slot window.
    pub end_time: String,
    pub required_staff: u32,
    pub assigned_resources: Vec<ResourceAssignment>,
}

impl CoverageSlot {
    /// The slot's time interval, strictly parsed. Slots only enter
    /// coverage through the resolver, which already rejected malformed
    /// times, so this failing indicates a caller bug.
    pub fn interval(&self) -> Result<TimeInterval> {
        TimeInterval::from_times(&self.start_time, &self.end_time)
    }

    /// Whether the slot has at least its required staff assigned.
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.assigned_resources.len() as u32 >= self.required_staff
    }

    /// How many more resources the slot needs, zero when covered.
    #[must_use]
    pub fn deficit(&self) -> u32 {
        self.required_staff.saturating_sub(self.assigned_resources.len() as u32)
    }
}

/// The kind of a timeline segment.
///
/// The declaration order is also the rendering precedence used to break
/// ties between segments starting at the same minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum SegmentKind {
    /// The store's open hours for the day.
    Opening,
    /// In-hours portion of a template slot.
    Template,
    /// Scheduled coverage outside opening hours.
    Overflow,
    /// One assigned resource on a slot.
    Resource,
    /// A slot staffed below its required count.
    Shortage,
    /// Open-but-unstaffed business hours.
    Gap,
}

impl SegmentKind {
    /// Tie-break rank for segments sharing a start minute.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Opening => 0,
            Self::Template => 1,
            Self::Overflow => 2,
            Self::Resource => 3,
            Self::Shortage => 4,
            Self::Gap => 5,
        }
    }
}

/// A typed, time-bounded piece of the rendered timeline.
///
/// Carries no identity beyond its (deterministic) id; rebuilt per render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimelineSegment {
    /// Stable id derived from kind, source slot, and range.
    pub id: String,
    /// Start, minutes since midnight.
    pub start_minute: u16,
    /// End, minutes since midnight (exclusive).
    pub end_minute: u16,
    pub kind: SegmentKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_staff: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_staff: Option<u32>,
}

impl TimelineSegment {
    /// The segment's interval on the minute-of-day axis.
    #[must_use]
    pub fn interval(&self) -> TimeInterval {
        TimeInterval { start_minute: self.start_minute, end_minute: self.end_minute }
    }
}

/// Coverage statistics for a single day of the plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DayCoverage {
    pub total_slots: u32,
    pub covered_slots: u32,
    /// Rounded percentage, 0 when the day has no slots.
    pub coverage_percentage: u8,
}

/// Aggregate coverage statistics for the whole plan period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CoverageStats {
    pub total_slots: u32,
    pub covered_slots: u32,
    /// Rounded percentage, 0 when the plan has no slots (empty plans are
    /// common at session start and must not surface NaN).
    pub coverage_percentage: u8,
    pub per_day: BTreeMap<NaiveDate, DayCoverage>,
}

/// Rounded percentage of covered slots, 0 for an empty slot count.
#[must_use]
pub fn coverage_percentage(covered: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(covered) * 100.0 / f64::from(total);
    // covered <= total, so the rounded ratio always fits a u8
    ratio.round() as u8
}
