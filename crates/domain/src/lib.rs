//! # Shiftcover Domain
//!
//! Business domain types and models for the shift coverage engine.
//!
//! This crate contains:
//! - Planning input records (ShiftTemplate, StoreOpeningRule, etc.)
//! - Derived view data (CoverageSlot, TimelineSegment, CoverageStats)
//! - Domain error types and Result definitions
//! - Time parsing and interval arithmetic
//!
//! ## Architecture
//! - No dependencies on other shiftcover crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export the time interval utilities
pub use utils::time::{format_minutes, parse_hhmm, parse_hhmm_lenient, TimeInterval};
