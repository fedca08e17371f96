//! Save-plan export - flattens a session into the batch the persistence
//! endpoint consumes.
//!
//! One record per (template × selected day × slot), each carrying the ids
//! of the resources booked into it. The endpoint is idempotent per
//! (template, store, date, slot), so resubmitting a batch replaces
//! assignments instead of duplicating shifts.

use shiftcover_domain::{PlanPeriod, PlanWriteBatch, ShiftWriteRecord, TemplateSelection};
use uuid::Uuid;

use super::ledger::AssignmentLedger;

/// Flatten selections and ledger into a single write batch.
///
/// Records follow selection order, then calendar order, then slot order,
/// so identical sessions always produce identically ordered batches.
pub fn build_write_batch(
    store_id: &str,
    selections: &[TemplateSelection],
    period: &PlanPeriod,
    ledger: &AssignmentLedger,
) -> PlanWriteBatch {
    let mut records = Vec::new();

    for selection in selections {
        let template = &selection.template;
        for &day in selection.selected_days.iter().filter(|day| period.contains(**day)) {
            for slot in &template.time_slots {
                let assignments = ledger
                    .for_slot(&template.id, &slot.id, day)
                    .iter()
                    .map(|a| a.resource_id.clone())
                    .collect();

                records.push(ShiftWriteRecord {
                    template_id: template.id.clone(),
                    store_id: store_id.to_string(),
                    date: day,
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                    slot_id: slot.id.clone(),
                    assignments,
                });
            }
        }
    }

    PlanWriteBatch { batch_id: Uuid::now_v7(), store_id: store_id.to_string(), records }
}
