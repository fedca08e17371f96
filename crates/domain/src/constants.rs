//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! planning engine.

// Time axis
pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 1440;

// Weekday keys for opening rules (JS Date.getDay convention)
pub const WEEKDAY_SUNDAY: u8 = 0;
pub const WEEKDAY_SATURDAY: u8 = 6;

// Coverage policy
pub const MIN_REQUIRED_STAFF: u32 = 1;

// Segment id prefixes, one per segment kind
pub const SEGMENT_ID_OPENING: &str = "opening";
pub const SEGMENT_ID_TEMPLATE: &str = "template";
pub const SEGMENT_ID_GAP: &str = "gap";
pub const SEGMENT_ID_RESOURCE: &str = "resource";
pub const SEGMENT_ID_SHORTAGE: &str = "shortage";
pub const SEGMENT_ID_OVERFLOW: &str = "overflow";
