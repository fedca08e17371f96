//! Port interfaces for the planning engine's external collaborators.
//!
//! Persistence and transport live outside this crate; the engine consumes
//! already-validated records through these traits and hands back plain
//! data. Retries, caching, and multi-user reconciliation are the
//! adapters' business.

use async_trait::async_trait;
use shiftcover_domain::{PlanWriteBatch, Result, ShiftTemplate, StoreOpeningRule};

/// Source of shift templates visible to a store (global plus store-owned).
#[async_trait]
pub trait ShiftTemplateRepository: Send + Sync {
    /// Fetch every template visible to the given store.
    async fn templates_for_store(&self, store_id: &str) -> Result<Vec<ShiftTemplate>>;
}

/// Source of per-weekday opening rules.
#[async_trait]
pub trait OpeningHoursRepository: Send + Sync {
    /// Fetch the store's opening rules, one per weekday (0 = Sunday).
    async fn opening_rules(&self, store_id: &str) -> Result<Vec<StoreOpeningRule>>;
}

/// Sink for save-plan batches.
///
/// Implementations are expected to be idempotent per (template, store,
/// date, slot): resubmission replaces assignments rather than duplicating
/// shifts.
#[async_trait]
pub trait ShiftPlanWriter: Send + Sync {
    /// Persist a whole plan batch in one call.
    async fn write_batch(&self, batch: &PlanWriteBatch) -> Result<()>;
}
