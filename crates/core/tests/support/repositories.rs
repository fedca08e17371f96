//! Mock port implementations for testing
//!
//! Provides in-memory mocks for all planning ports, enabling
//! deterministic integration tests without network or database
//! dependencies.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shiftcover_core::{OpeningHoursRepository, ShiftPlanWriter, ShiftTemplateRepository};
use shiftcover_domain::{
    PlanWriteBatch, Result as DomainResult, ShiftTemplate, StoreOpeningRule,
};

/// In-memory mock for `ShiftTemplateRepository`.
///
/// Returns a fixed template list regardless of store; scope filtering is
/// the service's job and is exactly what the tests exercise.
#[derive(Default, Clone)]
pub struct MockTemplateRepository {
    templates: Arc<Vec<ShiftTemplate>>,
}

impl MockTemplateRepository {
    /// Create a new mock seeded with the provided templates.
    pub fn new(templates: Vec<ShiftTemplate>) -> Self {
        Self { templates: Arc::new(templates) }
    }
}

#[async_trait]
impl ShiftTemplateRepository for MockTemplateRepository {
    async fn templates_for_store(&self, _store_id: &str) -> DomainResult<Vec<ShiftTemplate>> {
        Ok(self.templates.as_ref().clone())
    }
}

/// In-memory mock for `OpeningHoursRepository`.
#[derive(Default, Clone)]
pub struct MockOpeningHoursRepository {
    rules: Arc<Vec<StoreOpeningRule>>,
}

impl MockOpeningHoursRepository {
    /// Create a new mock seeded with the provided rules.
    pub fn new(rules: Vec<StoreOpeningRule>) -> Self {
        Self { rules: Arc::new(rules) }
    }
}

#[async_trait]
impl OpeningHoursRepository for MockOpeningHoursRepository {
    async fn opening_rules(&self, _store_id: &str) -> DomainResult<Vec<StoreOpeningRule>> {
        Ok(self.rules.as_ref().clone())
    }
}

/// `ShiftPlanWriter` mock that records every batch it receives.
#[derive(Default, Clone)]
pub struct RecordingPlanWriter {
    batches: Arc<Mutex<Vec<PlanWriteBatch>>>,
}

impl RecordingPlanWriter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All batches written so far.
    pub fn written(&self) -> Vec<PlanWriteBatch> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShiftPlanWriter for RecordingPlanWriter {
    async fn write_batch(&self, batch: &PlanWriteBatch) -> DomainResult<()> {
        self.batches.lock().unwrap().push(batch.clone());
        Ok(())
    }
}
