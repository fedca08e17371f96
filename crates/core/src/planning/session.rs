//! Planning session - the explicit context object every computation runs
//! against.
//!
//! The session owns the mutable planning state (template selections and
//! the assignment ledger) plus the read-only inputs (store, period,
//! opening rules). Derived data is recomputed from scratch on demand, so
//! there is no cached state to invalidate and no hidden module-level
//! singleton: the engine stays embeddable and testable.
//!
//! Mutations keep the structural invariant that every assignment
//! references a currently selected (template, slot, day): removing a
//! template or toggling a day off drops the now-orphaned assignments in
//! the same operation.

use chrono::NaiveDate;
use shiftcover_domain::{
    CoverageSlot, CoverageStats, PlanPeriod, PlanWriteBatch, PlanningError, ResourceAssignment,
    Result, ShiftTemplate, StoreOpeningRule, TemplateSelection, TimelineSegment,
};

use super::conflict::check_and_assign;
use super::coverage::{attach_assignments, coverage_stats};
use super::export::build_write_batch;
use super::ledger::AssignmentLedger;
use super::resolver::resolve_coverage_slots;
use super::timeline::build_timeline_segments;

/// One planner's working state for one store and period.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    store_id: String,
    period: PlanPeriod,
    opening_rules: Vec<StoreOpeningRule>,
    selections: Vec<TemplateSelection>,
    ledger: AssignmentLedger,
}

impl PlanningSession {
    /// Open a session over read-only inputs. Selections and ledger start
    /// empty.
    #[must_use]
    pub fn new(store_id: String, period: PlanPeriod, opening_rules: Vec<StoreOpeningRule>) -> Self {
        Self { store_id, period, opening_rules, selections: Vec::new(), ledger: AssignmentLedger::new() }
    }

    /// The store this plan is for.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// The inclusive date range being planned.
    #[must_use]
    pub fn period(&self) -> PlanPeriod {
        self.period
    }

    /// Current template selections, in the order they were added.
    #[must_use]
    pub fn selections(&self) -> &[TemplateSelection] {
        &self.selections
    }

    /// The assignment ledger (read-only; writes go through [`Self::assign`]).
    #[must_use]
    pub fn ledger(&self) -> &AssignmentLedger {
        &self.ledger
    }

    /// Add a template to the plan. Returns `false` without changes when
    /// the template is already selected: a template is selected at most
    /// once per plan.
    pub fn add_template(&mut self, template: ShiftTemplate) -> bool {
        if self.selections.iter().any(|s| s.template_id() == template.id) {
            return false;
        }
        self.selections.push(TemplateSelection::new(template));
        true
    }

    /// Remove a template from the plan, dropping its assignments with it.
    pub fn remove_template(&mut self, template_id: &str) {
        self.selections.retain(|s| s.template_id() != template_id);
        self.ledger.retain(|a| a.template_id != template_id);
    }

    /// Toggle a day on or off for a selected template. Returns whether the
    /// day is selected afterwards. Toggling off drops that template's
    /// assignments on that day.
    pub fn toggle_day(&mut self, template_id: &str, day: NaiveDate) -> Result<bool> {
        let selection = self
            .selections
            .iter_mut()
            .find(|s| s.template_id() == template_id)
            .ok_or_else(|| {
                PlanningError::Internal(format!("template {template_id} is not part of the plan"))
            })?;

        let selected = selection.toggle_day(day);
        if !selected {
            self.ledger.retain(|a| !(a.template_id == template_id && a.day == day));
        }
        Ok(selected)
    }

    /// Assign a resource to a slot, after the conflict check passes.
    pub fn assign(&mut self, candidate: ResourceAssignment) -> Result<()> {
        let slots = resolve_coverage_slots(&self.selections, &self.period);
        check_and_assign(&mut self.ledger, &slots, candidate)
    }

    /// Remove one assignment. A no-op when the tuple does not exist.
    pub fn remove_assignment(
        &mut self,
        resource_id: &str,
        template_id: &str,
        slot_id: &str,
        day: NaiveDate,
    ) {
        self.ledger.remove(resource_id, template_id, slot_id, day);
    }

    /// Reset the plan: clears selections and all assignments together.
    pub fn reset(&mut self) {
        self.selections.clear();
        self.ledger.clear();
    }

    /// The current coverage slots with assignments attached. Calling this
    /// twice without an intervening mutation yields identical output.
    #[must_use]
    pub fn coverage_slots(&self) -> Vec<CoverageSlot> {
        let slots = resolve_coverage_slots(&self.selections, &self.period);
        attach_assignments(&slots, &self.ledger)
    }

    /// Aggregate coverage statistics for the whole period.
    #[must_use]
    pub fn coverage_stats(&self) -> CoverageStats {
        coverage_stats(&self.coverage_slots())
    }

    /// The renderable timeline for one day of the period.
    #[must_use]
    pub fn timeline_for_day(&self, day: NaiveDate) -> Vec<TimelineSegment> {
        let slots = self.coverage_slots();
        build_timeline_segments(day, self.opening_rule_for(day), &slots)
    }

    /// Flatten the session into a save-plan batch.
    #[must_use]
    pub fn write_batch(&self) -> PlanWriteBatch {
        build_write_batch(&self.store_id, &self.selections, &self.period, &self.ledger)
    }

    fn opening_rule_for(&self, day: NaiveDate) -> Option<&StoreOpeningRule> {
        self.opening_rules.iter().find(|rule| rule.applies_to(day))
    }
}
