//! Domain types and models

pub mod planning;
pub mod timeline;

pub use planning::{
    PlanPeriod, PlanWriteBatch, ResourceAssignment, ShiftTemplate, ShiftWriteRecord,
    StoreOpeningRule, TemplateScope, TemplateSelection, TimeSlot,
};
pub use timeline::{CoverageSlot, CoverageStats, DayCoverage, SegmentKind, TimelineSegment};
