//! Planning input records: templates, selections, assignments, opening
//! rules.
//!
//! These are the canonical shapes the engine works with. Upstream payloads
//! are normalized into them at the ingestion boundary (serde aliases cover
//! the known legacy field spellings), so no alias handling leaks into the
//! core logic.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::utils::time::{parse_hhmm_lenient, TimeInterval};

/// Visibility scope of a shift template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateScope {
    /// Available to every store.
    Global,
    /// Owned by a single store (`store_id` is set).
    Store,
}

/// A concrete time window within a template requiring a minimum staff
/// count. A slot belongs to exactly one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    /// "HH:MM" start of the window.
    pub start_time: String,
    /// "HH:MM" end of the window.
    pub end_time: String,
    pub label: String,
    /// Minimum staff required, always >= 1.
    pub required_staff: u32,
}

/// A reusable named shift pattern with one or more time slots.
///
/// Read-only to the coverage engine; owned by the planning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: String,
    /// Display name. Legacy payloads spell this `nome`.
    #[serde(alias = "nome")]
    pub name: String,
    /// Display color for the timeline.
    #[serde(alias = "colore")]
    pub color: String,
    pub scope: TemplateScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    pub time_slots: Vec<TimeSlot>,
}

impl ShiftTemplate {
    /// Look up a slot owned by this template.
    #[must_use]
    pub fn slot(&self, slot_id: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|slot| slot.id == slot_id)
    }
}

/// The planner's choice to apply a template on specific days within the
/// active period.
///
/// `selected_days` is an ordered set so every derived computation walks
/// days in calendar order regardless of toggle order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSelection {
    pub template: ShiftTemplate,
    pub selected_days: BTreeSet<NaiveDate>,
}

impl TemplateSelection {
    /// Select a template with no days toggled on yet.
    #[must_use]
    pub fn new(template: ShiftTemplate) -> Self {
        Self { template, selected_days: BTreeSet::new() }
    }

    /// Id of the selected template.
    #[must_use]
    pub fn template_id(&self) -> &str {
        &self.template.id
    }

    /// Toggle a day on or off. Returns whether the day is selected after
    /// the toggle.
    pub fn toggle_day(&mut self, day: NaiveDate) -> bool {
        if self.selected_days.remove(&day) {
            false
        } else {
            self.selected_days.insert(day);
            true
        }
    }
}

/// One resource booked into one template slot on one day.
///
/// Identity is the full (resource, template, slot, day) tuple; the display
/// name rides along for conflict messages and resource segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ResourceAssignment {
    pub resource_id: String,
    /// Display name. Legacy payloads spell this `nome`.
    #[serde(alias = "nome")]
    pub resource_name: String,
    pub template_id: String,
    pub slot_id: String,
    pub day: NaiveDate,
}

impl ResourceAssignment {
    /// Whether two assignments are the same booking tuple (display name
    /// excluded).
    #[must_use]
    pub fn same_tuple(&self, other: &Self) -> bool {
        self.resource_id == other.resource_id
            && self.template_id == other.template_id
            && self.slot_id == other.slot_id
            && self.day == other.day
    }

    /// Whether this assignment books the given (template, slot, day).
    #[must_use]
    pub fn covers_slot(&self, template_id: &str, slot_id: &str, day: NaiveDate) -> bool {
        self.template_id == template_id && self.slot_id == slot_id && self.day == day
    }
}

/// Opening hours for one weekday of one store. External, read-only input.
///
/// `day` follows the upstream convention: 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOpeningRule {
    pub day: u8,
    /// "HH:MM" opening time.
    pub open_time: String,
    /// "HH:MM" closing time.
    pub close_time: String,
    pub is_closed: bool,
}

impl StoreOpeningRule {
    /// The open interval for this weekday, or `None` when the store is
    /// closed or the rule's times do not form a valid interval.
    #[must_use]
    pub fn open_interval(&self) -> Option<TimeInterval> {
        if self.is_closed {
            return None;
        }
        let open = parse_hhmm_lenient(&self.open_time);
        let close = parse_hhmm_lenient(&self.close_time);
        TimeInterval::new(open, close).ok()
    }

    /// Whether this rule applies to the given calendar day.
    #[must_use]
    pub fn applies_to(&self, day: NaiveDate) -> bool {
        u32::from(self.day) == day.weekday().num_days_from_sunday()
    }
}

/// The inclusive date range a plan is being composed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl PlanPeriod {
    /// Whether the period contains the given day.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    /// All days of the period in calendar order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let from = self.from;
        let to = self.to;
        (0u64..).map_while(move |offset| {
            let day = from.checked_add_days(Days::new(offset))?;
            (day <= to).then_some(day)
        })
    }
}

/// One row of the save-plan batch: a template slot on a concrete date with
/// its assigned resource ids.
///
/// The persistence endpoint is idempotent per (template, store, date,
/// slot): resubmitting replaces assignments instead of duplicating shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWriteRecord {
    pub template_id: String,
    pub store_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub slot_id: String,
    pub assignments: Vec<String>,
}

/// A full save-plan submission, written as a single batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWriteBatch {
    /// Correlation id for logging; not part of the idempotency key.
    pub batch_id: Uuid,
    pub store_id: String,
    pub records: Vec<ShiftWriteRecord>,
}
