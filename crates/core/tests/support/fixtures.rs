//! Canned planning fixtures shared across integration tests.

use chrono::NaiveDate;
use shiftcover_domain::{
    PlanPeriod, ResourceAssignment, ShiftTemplate, StoreOpeningRule, TemplateScope, TimeSlot,
};

/// 2025-03-03, a Monday.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

/// The first week of March 2025 (Monday through Sunday).
pub fn march_week() -> PlanPeriod {
    PlanPeriod { from: monday(), to: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap() }
}

/// One opening rule per weekday: open 09:00-18:00 except Sunday.
pub fn opening_rules() -> Vec<StoreOpeningRule> {
    (0u8..7)
        .map(|weekday| StoreOpeningRule {
            day: weekday,
            open_time: "09:00".to_string(),
            close_time: "18:00".to_string(),
            is_closed: weekday == 0,
        })
        .collect()
}

/// Build a time slot.
pub fn slot(id: &str, start: &str, end: &str, required: u32) -> TimeSlot {
    TimeSlot {
        id: id.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        label: format!("Slot {id}"),
        required_staff: required,
    }
}

/// Build a global template with the given slots.
pub fn global_template(id: &str, name: &str, slots: Vec<TimeSlot>) -> ShiftTemplate {
    ShiftTemplate {
        id: id.to_string(),
        name: name.to_string(),
        color: "#4A90D9".to_string(),
        scope: TemplateScope::Global,
        store_id: None,
        time_slots: slots,
    }
}

/// Build a store-scoped template with the given slots.
pub fn store_template(id: &str, store_id: &str, slots: Vec<TimeSlot>) -> ShiftTemplate {
    ShiftTemplate {
        id: id.to_string(),
        name: format!("Store template {id}"),
        color: "#D97A4A".to_string(),
        scope: TemplateScope::Store,
        store_id: Some(store_id.to_string()),
        time_slots: slots,
    }
}

/// Build an assignment tuple.
pub fn assignment(
    resource_id: &str,
    resource_name: &str,
    template_id: &str,
    slot_id: &str,
    day: NaiveDate,
) -> ResourceAssignment {
    ResourceAssignment {
        resource_id: resource_id.to_string(),
        resource_name: resource_name.to_string(),
        template_id: template_id.to_string(),
        slot_id: slot_id.to_string(),
        day,
    }
}
