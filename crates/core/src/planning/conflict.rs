//! Assignment conflict checker - gates every write to the ledger.
//!
//! A candidate assignment is admitted only if the resource holds no
//! overlapping time interval on that day. Touching endpoints are legal:
//! back-to-back shifts do not conflict.

use shiftcover_domain::{
    ConflictDetails, CoverageSlot, PlanningError, ResourceAssignment, Result, TimeInterval,
};

use super::ledger::AssignmentLedger;

/// Check a candidate against the resource's existing day and, if clear,
/// write it to the ledger.
///
/// Order of checks:
/// 1. Exact duplicate tuple → `DuplicateAssignment` (a duplicate is a
///    degenerate overlap, but callers want the distinct error kind).
/// 2. Any overlapping same-resource same-day interval →
///    `SchedulingConflict`, ledger untouched.
/// 3. Otherwise insert.
///
/// The candidate's own interval is resolved from `coverage_slots`. An
/// assignment referencing a (template, slot, day) absent from the current
/// selections is prevented by construction upstream; observing one here is
/// a caller bug and fails loudly.
pub fn check_and_assign(
    ledger: &mut AssignmentLedger,
    coverage_slots: &[CoverageSlot],
    candidate: ResourceAssignment,
) -> Result<()> {
    if ledger.contains(&candidate) {
        return Err(PlanningError::DuplicateAssignment(format!(
            "{} is already assigned to {}/{} on {}",
            candidate.resource_name, candidate.template_id, candidate.slot_id, candidate.day
        )));
    }

    let candidate_interval = resolve_interval(
        coverage_slots,
        &candidate.template_id,
        &candidate.slot_id,
        &candidate,
    )?;

    for existing in ledger.by_resource_and_day(&candidate.resource_id, candidate.day) {
        let existing_slot = find_slot(coverage_slots, &existing.template_id, &existing.slot_id, existing.day)
            .ok_or_else(|| {
                debug_assert!(false, "ledger assignment references a slot outside the current selections");
                PlanningError::Internal(format!(
                    "assignment of {} references unknown slot {}/{} on {}",
                    existing.resource_id, existing.template_id, existing.slot_id, existing.day
                ))
            })?;
        let existing_interval = existing_slot.interval()?;

        if candidate_interval.overlaps(&existing_interval) {
            return Err(PlanningError::SchedulingConflict(ConflictDetails {
                resource_name: candidate.resource_name.clone(),
                conflicting_slot_label: existing_slot.slot_label.clone(),
                conflicting_slot_range: existing_interval.range_label(),
                day: candidate.day.to_string(),
            }));
        }
    }

    ledger.assign(candidate)
}

fn resolve_interval(
    coverage_slots: &[CoverageSlot],
    template_id: &str,
    slot_id: &str,
    candidate: &ResourceAssignment,
) -> Result<TimeInterval> {
    let slot = find_slot(coverage_slots, template_id, slot_id, candidate.day).ok_or_else(|| {
        debug_assert!(false, "candidate assignment references a slot outside the current selections");
        PlanningError::UnknownSlot(format!(
            "{template_id}/{slot_id} on {} is not part of the current plan",
            candidate.day
        ))
    })?;
    slot.interval()
}

fn find_slot<'a>(
    coverage_slots: &'a [CoverageSlot],
    template_id: &str,
    slot_id: &str,
    day: chrono::NaiveDate,
) -> Option<&'a CoverageSlot> {
    coverage_slots
        .iter()
        .find(|slot| slot.template_id == template_id && slot.slot_id == slot_id && slot.day == day)
}
