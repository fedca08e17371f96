//! End-to-end planning flow: load inputs through the ports, compose a
//! plan in a session, and submit it as a batch.

mod support;

use std::sync::Arc;

use chrono::Days;
use shiftcover_core::PlanningService;
use shiftcover_domain::{PlanningError, SegmentKind, TimeInterval};
use support::fixtures::{
    assignment, global_template, march_week, monday, opening_rules, slot, store_template,
};
use support::repositories::{
    MockOpeningHoursRepository, MockTemplateRepository, RecordingPlanWriter,
};

fn service_with(
    templates: Vec<shiftcover_domain::ShiftTemplate>,
    writer: RecordingPlanWriter,
) -> PlanningService {
    PlanningService::new(
        Arc::new(MockTemplateRepository::new(templates)),
        Arc::new(MockOpeningHoursRepository::new(opening_rules())),
        Arc::new(writer),
    )
}

#[tokio::test]
async fn available_templates_filter_out_foreign_stores() {
    let templates = vec![
        global_template("tpl-global", "Morning", vec![]),
        store_template("tpl-own", "store-1", vec![]),
        store_template("tpl-other", "store-2", vec![]),
    ];
    let service = service_with(templates, RecordingPlanWriter::new());

    let visible = service.available_templates("store-1").await.unwrap();
    let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["tpl-global", "tpl-own"]);
}

#[tokio::test]
async fn full_planning_flow_produces_expected_timeline() {
    let template =
        global_template("tpl-1", "Early shift", vec![slot("s1", "08:00", "10:00", 1)]);
    let service = service_with(vec![template.clone()], RecordingPlanWriter::new());

    let mut session = service.open_session("store-1", march_week()).await.unwrap();
    assert!(session.add_template(template));
    session.toggle_day("tpl-1", monday()).unwrap();

    // Store opens 09:00; the 08:00-10:00 slot overflows one hour, is
    // understaffed, and leaves the rest of the day uncovered.
    let segments = session.timeline_for_day(monday());

    let by_kind = |kind: SegmentKind| -> Vec<(u16, u16)> {
        segments
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| (s.start_minute, s.end_minute))
            .collect()
    };

    assert_eq!(by_kind(SegmentKind::Opening), vec![(540, 1080)]);
    assert_eq!(by_kind(SegmentKind::Overflow), vec![(480, 540)]);
    assert_eq!(by_kind(SegmentKind::Template), vec![(540, 600)]);
    assert_eq!(by_kind(SegmentKind::Shortage), vec![(480, 600)]);
    assert_eq!(by_kind(SegmentKind::Gap), vec![(600, 1080)]);

    // Assigning a resource removes the shortage and adds their segment
    session.assign(assignment("res-1", "Ada Verdi", "tpl-1", "s1", monday())).unwrap();
    let segments = session.timeline_for_day(monday());
    assert!(segments.iter().all(|s| s.kind != SegmentKind::Shortage));
    let resource = segments.iter().find(|s| s.kind == SegmentKind::Resource).unwrap();
    assert_eq!(resource.label, "Ada Verdi");
}

#[tokio::test]
async fn double_booking_is_rejected_and_back_to_back_is_not() {
    let template = global_template(
        "tpl-1",
        "Day shift",
        vec![
            slot("a", "09:00", "13:00", 1),
            slot("b", "12:00", "16:00", 1),
            slot("c", "13:00", "17:00", 1),
        ],
    );
    let service = service_with(vec![template.clone()], RecordingPlanWriter::new());

    let mut session = service.open_session("store-1", march_week()).await.unwrap();
    session.add_template(template);
    session.toggle_day("tpl-1", monday()).unwrap();

    session.assign(assignment("res-x", "X", "tpl-1", "a", monday())).unwrap();

    // Slot b overlaps slot a between 12:00 and 13:00
    let err = session.assign(assignment("res-x", "X", "tpl-1", "b", monday())).unwrap_err();
    match err {
        PlanningError::SchedulingConflict(details) => {
            assert_eq!(details.conflicting_slot_range, "09:00-13:00");
        }
        other => panic!("expected SchedulingConflict, got {other:?}"),
    }

    // Slot c only touches slot a at 13:00, which is legal
    session.assign(assignment("res-x", "X", "tpl-1", "c", monday())).unwrap();

    // The resource's intervals stay pairwise non-overlapping
    let slots = session.coverage_slots();
    let intervals: Vec<TimeInterval> = session
        .ledger()
        .by_resource_and_day("res-x", monday())
        .iter()
        .map(|a| {
            slots
                .iter()
                .find(|s| s.template_id == a.template_id && s.slot_id == a.slot_id && s.day == a.day)
                .map(|s| s.interval().unwrap())
                .unwrap()
        })
        .collect();
    for (i, a) in intervals.iter().enumerate() {
        for b in intervals.iter().skip(i + 1) {
            assert!(!a.overlaps(b), "{} overlaps {}", a.range_label(), b.range_label());
        }
    }
}

#[tokio::test]
async fn sunday_plan_is_pure_overflow() {
    let template = global_template("tpl-1", "Weekend", vec![slot("s1", "10:00", "14:00", 1)]);
    let service = service_with(vec![template.clone()], RecordingPlanWriter::new());

    let mut session = service.open_session("store-1", march_week()).await.unwrap();
    session.add_template(template);
    let sunday = monday().checked_add_days(Days::new(6)).unwrap();
    session.toggle_day("tpl-1", sunday).unwrap();

    let segments = session.timeline_for_day(sunday);
    assert!(segments.iter().all(|s| s.kind != SegmentKind::Opening));
    assert!(segments.iter().all(|s| s.kind != SegmentKind::Gap));
    assert!(segments.iter().any(|s| s.kind == SegmentKind::Overflow));
}

#[tokio::test]
async fn coverage_stats_track_assignments() {
    let template = global_template(
        "tpl-1",
        "Day shift",
        vec![slot("a", "09:00", "13:00", 1), slot("c", "13:00", "17:00", 1)],
    );
    let service = service_with(vec![template.clone()], RecordingPlanWriter::new());

    let mut session = service.open_session("store-1", march_week()).await.unwrap();
    session.add_template(template);
    session.toggle_day("tpl-1", monday()).unwrap();

    let stats = session.coverage_stats();
    assert_eq!(stats.total_slots, 2);
    assert_eq!(stats.coverage_percentage, 0);

    session.assign(assignment("res-1", "Ada", "tpl-1", "a", monday())).unwrap();
    let stats = session.coverage_stats();
    assert_eq!(stats.covered_slots, 1);
    assert_eq!(stats.coverage_percentage, 50);
    assert_eq!(stats.per_day[&monday()].coverage_percentage, 50);
}

#[tokio::test]
async fn save_plan_submits_one_record_per_slot_day() {
    let template = global_template(
        "tpl-1",
        "Day shift",
        vec![slot("a", "09:00", "13:00", 1), slot("c", "13:00", "17:00", 1)],
    );
    let writer = RecordingPlanWriter::new();
    let service = service_with(vec![template.clone()], writer.clone());

    let mut session = service.open_session("store-1", march_week()).await.unwrap();
    session.add_template(template);
    session.toggle_day("tpl-1", monday()).unwrap();
    let tuesday = monday().checked_add_days(Days::new(1)).unwrap();
    session.toggle_day("tpl-1", tuesday).unwrap();
    session.assign(assignment("res-1", "Ada", "tpl-1", "a", monday())).unwrap();

    service.save_plan(&session).await.unwrap();

    let written = writer.written();
    assert_eq!(written.len(), 1);
    let batch = &written[0];
    assert_eq!(batch.store_id, "store-1");
    // 2 days x 2 slots
    assert_eq!(batch.records.len(), 4);

    let monday_a = batch
        .records
        .iter()
        .find(|r| r.date == monday() && r.slot_id == "a")
        .unwrap();
    assert_eq!(monday_a.assignments, vec!["res-1".to_string()]);
    assert_eq!(monday_a.start_time, "09:00");

    let unstaffed: usize = batch.records.iter().filter(|r| r.assignments.is_empty()).count();
    assert_eq!(unstaffed, 3);
}

#[tokio::test]
async fn duplicate_assignment_is_reported_as_duplicate() {
    let template = global_template("tpl-1", "Day shift", vec![slot("a", "09:00", "13:00", 1)]);
    let service = service_with(vec![template.clone()], RecordingPlanWriter::new());

    let mut session = service.open_session("store-1", march_week()).await.unwrap();
    session.add_template(template);
    session.toggle_day("tpl-1", monday()).unwrap();

    session.assign(assignment("res-1", "Ada", "tpl-1", "a", monday())).unwrap();
    let err = session.assign(assignment("res-1", "Ada", "tpl-1", "a", monday())).unwrap_err();
    assert!(matches!(err, PlanningError::DuplicateAssignment(_)));

    // The UI treats this as already satisfied; the ledger is unchanged
    assert_eq!(session.ledger().len(), 1);
}
