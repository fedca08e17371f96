//! Planning service - wires the pure engine to its external collaborators.

use std::sync::Arc;

use shiftcover_domain::{PlanPeriod, Result, ShiftTemplate, TemplateScope};
use tracing::{debug, info};

use super::ports::{OpeningHoursRepository, ShiftPlanWriter, ShiftTemplateRepository};
use super::session::PlanningSession;

/// Entry point for a planning UI: loads inputs through the ports, opens
/// sessions, and submits finished plans.
pub struct PlanningService {
    templates: Arc<dyn ShiftTemplateRepository>,
    opening_hours: Arc<dyn OpeningHoursRepository>,
    writer: Arc<dyn ShiftPlanWriter>,
}

impl PlanningService {
    /// Create a new planning service.
    pub fn new(
        templates: Arc<dyn ShiftTemplateRepository>,
        opening_hours: Arc<dyn OpeningHoursRepository>,
        writer: Arc<dyn ShiftPlanWriter>,
    ) -> Self {
        Self { templates, opening_hours, writer }
    }

    /// Open a fresh session for a store and period, with the store's
    /// opening rules loaded.
    pub async fn open_session(&self, store_id: &str, period: PlanPeriod) -> Result<PlanningSession> {
        let rules = self.opening_hours.opening_rules(store_id).await?;
        debug!(store_id, rule_count = rules.len(), "opened planning session");
        Ok(PlanningSession::new(store_id.to_string(), period, rules))
    }

    /// Templates the planner may add to a plan for this store: global
    /// templates plus the store's own.
    pub async fn available_templates(&self, store_id: &str) -> Result<Vec<ShiftTemplate>> {
        let templates = self.templates.templates_for_store(store_id).await?;
        Ok(templates
            .into_iter()
            .filter(|template| match template.scope {
                TemplateScope::Global => true,
                TemplateScope::Store => template.store_id.as_deref() == Some(store_id),
            })
            .collect())
    }

    /// Flatten the session and submit it as a single batch write.
    pub async fn save_plan(&self, session: &PlanningSession) -> Result<()> {
        let batch = session.write_batch();
        info!(
            store_id = %batch.store_id,
            batch_id = %batch.batch_id,
            record_count = batch.records.len(),
            "saving plan"
        );
        self.writer.write_batch(&batch).await
    }
}
