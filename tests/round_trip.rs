use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

use tick::parse::{parse_list, serialize_list};

/// Helper: load a fixture file, parse it, serialize it, and assert byte-for-byte equality
fn assert_round_trip(fixture_name: &str) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", fixture_name, e));

    let tasks = parse_list(&source);
    let output = serialize_list(&tasks);

    assert_eq!(
        output, source,
        "Round-trip failed for fixture: {}",
        fixture_name
    );
}

// ============================================================================
// Round-trip tests
// ============================================================================

#[test]
fn round_trip_simple_list() {
    assert_round_trip("simple_list.md");
}

#[test]
fn round_trip_annotated_list() {
    assert_round_trip("annotated_list.md");
}

#[test]
fn round_trip_prose_only() {
    // No task markers anywhere; load then save must reproduce the text
    assert_round_trip("prose_notes.md");
}

#[test]
fn round_trip_survives_toggle_pair() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/annotated_list.md");
    let source = fs::read_to_string(&path).unwrap();

    let mut tasks = parse_list(&source);
    for task in &mut tasks {
        tick::ops::task_ops::toggle_task(task);
        tick::ops::task_ops::toggle_task(task);
    }

    assert_eq!(serialize_list(&tasks), source);
}

// ============================================================================
// Parse correctness tests
// ============================================================================

#[test]
fn annotated_list_parse_correctness() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/annotated_list.md");
    let source = fs::read_to_string(&path).unwrap();
    let tasks = parse_list(&source);

    // "# Deep Work", blank, 4 task lines, blank, prose, trailing empty
    assert_eq!(tasks.len(), 9);

    let heading = &tasks[0];
    assert!(!heading.is_task);
    assert!(heading.is_heading());

    let review = &tasks[2];
    assert!(review.is_task);
    assert!(!review.is_done);
    assert_eq!(review.text(), "morning review @8:30");
    assert_eq!(review.duration, Some(1800));
    assert_eq!(
        review.scheduled.unwrap().format("%H:%M").to_string(),
        "08:30"
    );

    let sprint = &tasks[3];
    assert!(sprint.is_done);
    assert_eq!(sprint.duration, Some(3600));

    let sub = &tasks[4];
    assert_eq!(sub.indent, 2);
    assert_eq!(sub.duration, Some(2700));

    let block = &tasks[5];
    assert_eq!(block.duration, Some(9000));

    let prose = &tasks[7];
    assert!(!prose.is_task);
    assert!(!prose.is_heading());
    assert!(prose.scheduled.is_none());
    assert!(prose.duration.is_none());
}

#[test]
fn ids_are_dense_at_load() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/simple_list.md");
    let source = fs::read_to_string(&path).unwrap();
    let tasks = parse_list(&source);

    let ids: Vec<usize> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, (0..tasks.len()).collect::<Vec<_>>());
}
