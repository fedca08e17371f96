//! Resource assignment ledger - the in-memory store of who is booked
//! where.
//!
//! The ledger is a pure store: it rejects exact duplicates but does no
//! time-overlap checking. Overlap policy lives in the conflict checker so
//! the two concerns stay independently testable.

use ahash::AHashMap as HashMap;
use chrono::NaiveDate;
use shiftcover_domain::{PlanningError, ResourceAssignment, Result};

/// In-memory collection of resource assignments, indexed for the two hot
/// lookups: conflict checking (by resource and day) and aggregation (by
/// slot and day).
#[derive(Debug, Default, Clone)]
pub struct AssignmentLedger {
    by_resource_day: HashMap<(String, NaiveDate), Vec<ResourceAssignment>>,
    by_slot_day: HashMap<(String, String, NaiveDate), Vec<ResourceAssignment>>,
    len: usize,
}

impl AssignmentLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assignments held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ledger holds no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the exact booking tuple is already present.
    #[must_use]
    pub fn contains(&self, candidate: &ResourceAssignment) -> bool {
        self.by_resource_and_day(&candidate.resource_id, candidate.day)
            .iter()
            .any(|existing| existing.same_tuple(candidate))
    }

    /// Insert an assignment, rejecting exact duplicates.
    ///
    /// Insertion order is preserved per bucket, which keeps every derived
    /// listing deterministic.
    pub fn assign(&mut self, assignment: ResourceAssignment) -> Result<()> {
        if self.contains(&assignment) {
            return Err(PlanningError::DuplicateAssignment(format!(
                "{} is already assigned to {}/{} on {}",
                assignment.resource_name,
                assignment.template_id,
                assignment.slot_id,
                assignment.day
            )));
        }

        let resource_key = (assignment.resource_id.clone(), assignment.day);
        let slot_key =
            (assignment.template_id.clone(), assignment.slot_id.clone(), assignment.day);

        self.by_resource_day.entry(resource_key).or_default().push(assignment.clone());
        self.by_slot_day.entry(slot_key).or_default().push(assignment);
        self.len += 1;
        Ok(())
    }

    /// Remove one assignment tuple. Removing a non-existent assignment is
    /// a no-op, not an error.
    pub fn remove(&mut self, resource_id: &str, template_id: &str, slot_id: &str, day: NaiveDate) {
        let resource_key = (resource_id.to_string(), day);
        let mut removed = false;

        if let Some(bucket) = self.by_resource_day.get_mut(&resource_key) {
            let before = bucket.len();
            bucket.retain(|a| !(a.template_id == template_id && a.slot_id == slot_id));
            removed = bucket.len() < before;
            if bucket.is_empty() {
                self.by_resource_day.remove(&resource_key);
            }
        }

        if removed {
            let slot_key = (template_id.to_string(), slot_id.to_string(), day);
            if let Some(bucket) = self.by_slot_day.get_mut(&slot_key) {
                bucket.retain(|a| a.resource_id != resource_id);
                if bucket.is_empty() {
                    self.by_slot_day.remove(&slot_key);
                }
            }
            self.len -= 1;
        }
    }

    /// All assignments of one resource on one day, in insertion order.
    ///
    /// Runs in time proportional to that resource's assignment count, not
    /// the whole ledger.
    #[must_use]
    pub fn by_resource_and_day(&self, resource_id: &str, day: NaiveDate) -> &[ResourceAssignment] {
        self.by_resource_day
            .get(&(resource_id.to_string(), day))
            .map_or(&[], Vec::as_slice)
    }

    /// All assignments booked into one (template, slot, day), in insertion
    /// order.
    #[must_use]
    pub fn for_slot(
        &self,
        template_id: &str,
        slot_id: &str,
        day: NaiveDate,
    ) -> &[ResourceAssignment] {
        self.by_slot_day
            .get(&(template_id.to_string(), slot_id.to_string(), day))
            .map_or(&[], Vec::as_slice)
    }

    /// Drop every assignment that does not satisfy `keep`. Used when a
    /// template is removed or a day is toggled off, so no assignment can
    /// reference a selection that no longer exists.
    pub fn retain(&mut self, keep: impl Fn(&ResourceAssignment) -> bool) {
        let mut all: Vec<ResourceAssignment> = self
            .by_resource_day
            .values()
            .flatten()
            .filter(|a| keep(a))
            .cloned()
            .collect();

        // Rebuild in a stable order; bucket iteration above follows map
        // order and must not leak into per-slot listings.
        all.sort_by(|a, b| {
            (a.day, &a.template_id, &a.slot_id, &a.resource_id)
                .cmp(&(b.day, &b.template_id, &b.slot_id, &b.resource_id))
        });

        self.clear();
        for assignment in all {
            // Uniqueness survives filtering, so re-inserting cannot fail.
            let _ = self.assign(assignment);
        }
    }

    /// Remove every assignment. Part of plan reset.
    pub fn clear(&mut self) {
        self.by_resource_day.clear();
        self.by_slot_day.clear();
        self.len = 0;
    }
}
