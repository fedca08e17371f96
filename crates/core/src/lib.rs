//! # Shiftcover Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The coverage computation and timeline-segment builder
//! - The assignment ledger and its conflict checker
//! - Port/adapter interfaces (traits) for persistence and transport
//!
//! ## Architecture Principles
//! - Only depends on `shiftcover-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod planning;

// Re-export specific items to avoid ambiguity
pub use planning::ports::{OpeningHoursRepository, ShiftPlanWriter, ShiftTemplateRepository};
pub use planning::{
    attach_assignments, build_timeline_segments, build_write_batch, check_and_assign,
    coverage_stats, resolve_coverage_slots, AssignmentLedger, PlanningService, PlanningSession,
};
