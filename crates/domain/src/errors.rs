//! Error types used throughout the planning engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Details attached to a scheduling conflict, sufficient for the UI to
/// render a message without re-querying the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDetails {
    /// Display name of the resource being double-booked.
    pub resource_name: String,
    /// Label of the slot the resource already holds.
    pub conflicting_slot_label: String,
    /// Time range of the conflicting slot, formatted "HH:MM-HH:MM".
    pub conflicting_slot_range: String,
    /// ISO date of the day on which the conflict occurs.
    pub day: String,
}

/// Main error type for the shift coverage engine
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PlanningError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Duplicate assignment: {0}")]
    DuplicateAssignment(String),

    #[error("Scheduling conflict: {} already covers {} ({}) on {}",
        .0.resource_name, .0.conflicting_slot_label, .0.conflicting_slot_range, .0.day)]
    SchedulingConflict(ConflictDetails),

    #[error("Unknown slot: {0}")]
    UnknownSlot(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for planning operations
pub type Result<T> = std::result::Result<T, PlanningError>;
