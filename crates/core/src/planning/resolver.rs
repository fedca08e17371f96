//! Coverage slot resolver - expands template selections into per-day
//! coverage requirements.
//!
//! The output is the Cartesian product of each selected template's days
//! (restricted to the plan period) and its time slots. No deduplication is
//! needed: a template is selected at most once per plan, so
//! (template, slot, day) is unique by construction.

use shiftcover_domain::utils::time::parse_hhmm_lenient;
use shiftcover_domain::{CoverageSlot, PlanPeriod, TemplateSelection, TimeInterval};
use tracing::warn;

/// Expand selections into a flat, deterministically ordered list of
/// coverage slots with no assignments attached yet.
///
/// A slot whose times do not parse as strict "HH:MM" is skipped with a
/// warning rather than failing the whole resolve: one bad template must
/// not blank the entire timeline. Templates with zero slots simply
/// contribute nothing.
pub fn resolve_coverage_slots(
    selections: &[TemplateSelection],
    period: &PlanPeriod,
) -> Vec<CoverageSlot> {
    let mut slots = Vec::new();

    for selection in selections {
        let template = &selection.template;
        for &day in selection.selected_days.iter().filter(|day| period.contains(**day)) {
            for slot in &template.time_slots {
                if let Err(err) = TimeInterval::from_times(&slot.start_time, &slot.end_time) {
                    warn!(
                        template_id = %template.id,
                        slot_id = %slot.id,
                        error = %err,
                        "skipping slot with malformed time range"
                    );
                    continue;
                }

                slots.push(CoverageSlot {
                    day,
                    template_id: template.id.clone(),
                    template_name: template.name.clone(),
                    template_color: template.color.clone(),
                    slot_id: slot.id.clone(),
                    slot_label: slot.label.clone(),
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                    required_staff: slot.required_staff,
                    assigned_resources: Vec::new(),
                });
            }
        }
    }

    // Explicit ordering so downstream consumers never depend on map or
    // set iteration order.
    slots.sort_by_key(|slot| {
        (slot.day, slot.template_id.clone(), parse_hhmm_lenient(&slot.start_time), slot.slot_id.clone())
    });

    slots
}
