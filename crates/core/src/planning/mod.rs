//! Shift coverage planning engine.
//!
//! Data flow: the resolver expands template selections into coverage
//! slots; the aggregator joins them with the assignment ledger; the
//! timeline builder projects one day of the result onto the time axis.
//! The conflict checker gates every write to the ledger.

pub mod conflict;
pub mod coverage;
pub mod export;
pub mod ledger;
pub mod ports;
pub mod resolver;
pub mod service;
pub mod session;
pub mod timeline;

pub use conflict::check_and_assign;
pub use coverage::{attach_assignments, coverage_stats};
pub use export::build_write_batch;
pub use ledger::AssignmentLedger;
pub use resolver::resolve_coverage_slots;
pub use service::PlanningService;
pub use session::PlanningSession;
pub use timeline::build_timeline_segments;
