//! Coverage aggregator - joins coverage requirements with the assignment
//! ledger.
//!
//! Derived data is always rebuilt, never patched in place, so the
//! rendering layer can hold the previous snapshot while a new one is
//! computed.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shiftcover_domain::types::timeline::coverage_percentage;
use shiftcover_domain::{CoverageSlot, CoverageStats, DayCoverage};

use super::ledger::AssignmentLedger;

/// Rebuild coverage slots with their assigned resources attached.
///
/// The input slots are the resolver's output (no assignments); the result
/// is a fresh list in the same order with each slot's bookings pulled from
/// the ledger.
pub fn attach_assignments(
    slots: &[CoverageSlot],
    ledger: &AssignmentLedger,
) -> Vec<CoverageSlot> {
    slots
        .iter()
        .map(|slot| {
            let mut populated = slot.clone();
            populated.assigned_resources =
                ledger.for_slot(&slot.template_id, &slot.slot_id, slot.day).to_vec();
            populated
        })
        .collect()
}

/// Aggregate coverage statistics over populated coverage slots.
///
/// The percentage is defined as 0 for an empty plan; per-day figures
/// follow the same formula restricted to that day's slots.
pub fn coverage_stats(slots: &[CoverageSlot]) -> CoverageStats {
    let mut per_day_counts: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    let mut covered_slots = 0u32;

    for slot in slots {
        let entry = per_day_counts.entry(slot.day).or_default();
        entry.0 += 1;
        if slot.is_covered() {
            entry.1 += 1;
            covered_slots += 1;
        }
    }

    let total_slots = slots.len() as u32;
    let per_day = per_day_counts
        .into_iter()
        .map(|(day, (total, covered))| {
            (
                day,
                DayCoverage {
                    total_slots: total,
                    covered_slots: covered,
                    coverage_percentage: coverage_percentage(covered, total),
                },
            )
        })
        .collect();

    CoverageStats {
        total_slots,
        covered_slots,
        coverage_percentage: coverage_percentage(covered_slots, total_slots),
        per_day,
    }
}
