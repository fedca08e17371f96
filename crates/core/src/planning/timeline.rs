//! Timeline segment builder - composes one day's renderable timeline.
//!
//! For a single day this merges the store's opening hours, the day's
//! coverage slots, and their assignments into an ordered list of typed
//! segments. Policy, in precedence order:
//!
//! 1. An `opening` segment spans the open hours; omitted on closed days.
//! 2. Each slot's in-hours portion becomes a `template` segment; the
//!    portions before opening or after closing become `overflow` segments
//!    (never silently clipped away). On a closed day the whole slot is
//!    overflow.
//! 3. Understaffed slots additionally emit a `shortage` segment at the
//!    slot's full interval, labeled with the deficit.
//! 4. Each assigned resource emits a `resource` segment at the slot's
//!    full interval.
//! 5. Open-but-uncovered stretches become `gap` segments, but only when
//!    the day has at least one coverage slot: an empty day is "not yet
//!    planned", not "fully uncovered".
//!
//! Output ordering is fully explicit (start minute, then kind precedence,
//! then id) so snapshot-style tests reproduce byte for byte.

use chrono::NaiveDate;
use shiftcover_domain::constants::{
    SEGMENT_ID_GAP, SEGMENT_ID_OPENING, SEGMENT_ID_OVERFLOW, SEGMENT_ID_RESOURCE,
    SEGMENT_ID_SHORTAGE, SEGMENT_ID_TEMPLATE,
};
use shiftcover_domain::{CoverageSlot, SegmentKind, StoreOpeningRule, TimeInterval, TimelineSegment};
use tracing::warn;

/// Build the ordered timeline segments for one day.
///
/// `slots` must be that day's coverage slots with assignments attached
/// (resolver output run through the aggregator); slots for other days are
/// ignored. `opening_rule` is the weekday's rule, if the store has one.
pub fn build_timeline_segments(
    day: NaiveDate,
    opening_rule: Option<&StoreOpeningRule>,
    slots: &[CoverageSlot],
) -> Vec<TimelineSegment> {
    let open = opening_rule.filter(|rule| rule.applies_to(day)).and_then(StoreOpeningRule::open_interval);

    let mut segments = Vec::new();
    let mut covered: Vec<TimeInterval> = Vec::new();
    let mut day_has_slots = false;

    if let Some(open) = open {
        segments.push(TimelineSegment {
            id: format!("{SEGMENT_ID_OPENING}-{day}"),
            start_minute: open.start_minute,
            end_minute: open.end_minute,
            kind: SegmentKind::Opening,
            label: "Opening hours".to_string(),
            color: None,
            required_staff: None,
            assigned_staff: None,
        });
    }

    for slot in slots.iter().filter(|slot| slot.day == day) {
        let interval = match slot.interval() {
            Ok(interval) => interval,
            Err(err) => {
                // The resolver refuses malformed slots, so this only
                // triggers on hand-built input.
                warn!(slot_id = %slot.slot_id, error = %err, "skipping malformed coverage slot");
                continue;
            }
        };
        day_has_slots = true;

        match open.and_then(|bounds| interval.clip(&bounds).map(|inside| (bounds, inside))) {
            Some((bounds, inside)) => {
                segments.push(template_segment(slot, &inside, day));
                covered.push(inside);

                if interval.start_minute < bounds.start_minute {
                    let before = TimeInterval {
                        start_minute: interval.start_minute,
                        end_minute: bounds.start_minute,
                    };
                    segments.push(overflow_segment(slot, &before, day));
                }
                if interval.end_minute > bounds.end_minute {
                    let after = TimeInterval {
                        start_minute: bounds.end_minute,
                        end_minute: interval.end_minute,
                    };
                    segments.push(overflow_segment(slot, &after, day));
                }
            }
            // Closed day, or the slot lies entirely outside opening hours
            None => segments.push(overflow_segment(slot, &interval, day)),
        }

        if slot.deficit() > 0 {
            segments.push(TimelineSegment {
                id: format!("{SEGMENT_ID_SHORTAGE}-{}-{}-{day}", slot.template_id, slot.slot_id),
                start_minute: interval.start_minute,
                end_minute: interval.end_minute,
                kind: SegmentKind::Shortage,
                label: slot.deficit().to_string(),
                color: None,
                required_staff: Some(slot.required_staff),
                assigned_staff: Some(slot.assigned_resources.len() as u32),
            });
        }

        for resource in &slot.assigned_resources {
            segments.push(TimelineSegment {
                id: format!(
                    "{SEGMENT_ID_RESOURCE}-{}-{}-{}-{day}",
                    resource.resource_id, slot.template_id, slot.slot_id
                ),
                start_minute: interval.start_minute,
                end_minute: interval.end_minute,
                kind: SegmentKind::Resource,
                label: resource.resource_name.clone(),
                color: Some(slot.template_color.clone()),
                required_staff: None,
                assigned_staff: None,
            });
        }
    }

    if let Some(open) = open {
        if day_has_slots {
            segments.extend(gap_segments(day, &open, &mut covered));
        }
    }

    segments.sort_by(|a, b| {
        (a.start_minute, a.kind.precedence(), &a.id)
            .cmp(&(b.start_minute, b.kind.precedence(), &b.id))
    });

    segments
}

fn template_segment(slot: &CoverageSlot, inside: &TimeInterval, day: NaiveDate) -> TimelineSegment {
    TimelineSegment {
        id: format!("{SEGMENT_ID_TEMPLATE}-{}-{}-{day}", slot.template_id, slot.slot_id),
        start_minute: inside.start_minute,
        end_minute: inside.end_minute,
        kind: SegmentKind::Template,
        label: slot.template_name.clone(),
        color: Some(slot.template_color.clone()),
        required_staff: Some(slot.required_staff),
        assigned_staff: Some(slot.assigned_resources.len() as u32),
    }
}

fn overflow_segment(slot: &CoverageSlot, part: &TimeInterval, day: NaiveDate) -> TimelineSegment {
    TimelineSegment {
        id: format!(
            "{SEGMENT_ID_OVERFLOW}-{}-{}-{day}-{}-{}",
            slot.template_id, slot.slot_id, part.start_minute, part.end_minute
        ),
        start_minute: part.start_minute,
        end_minute: part.end_minute,
        kind: SegmentKind::Overflow,
        label: slot.template_name.clone(),
        color: Some(slot.template_color.clone()),
        required_staff: None,
        assigned_staff: None,
    }
}

/// Sweep the open interval and emit a gap for every stretch no template
/// segment covers.
fn gap_segments(
    day: NaiveDate,
    open: &TimeInterval,
    covered: &mut Vec<TimeInterval>,
) -> Vec<TimelineSegment> {
    covered.sort_by_key(|interval| (interval.start_minute, interval.end_minute));

    let mut gaps = Vec::new();
    let mut cursor = open.start_minute;

    let mut push_gap = |start: u16, end: u16| {
        gaps.push(TimelineSegment {
            id: format!("{SEGMENT_ID_GAP}-{day}-{start}-{end}"),
            start_minute: start,
            end_minute: end,
            kind: SegmentKind::Gap,
            label: "Uncovered".to_string(),
            color: None,
            required_staff: None,
            assigned_staff: None,
        });
    };

    for interval in covered.iter() {
        if interval.start_minute > cursor {
            push_gap(cursor, interval.start_minute);
        }
        cursor = cursor.max(interval.end_minute);
    }
    if cursor < open.end_minute {
        push_gap(cursor, open.end_minute);
    }

    gaps
}
