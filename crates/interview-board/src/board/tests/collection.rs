use super::common::*;
use crate::board::collection::ScheduleCollection;
use crate::board::entry::InterviewMode;
use crate::board::error::ScheduleError;

#[test]
fn add_keeps_entries_sorted_by_date_then_time() {
    let mut collection = ScheduleCollection::new();
    collection.add(slot(16, (9, 0), (10, 0))).expect("add");
    collection.add(slot(15, (14, 0), (15, 0))).expect("add");
    collection.add(slot(15, (9, 0), (9, 30))).expect("add");
    collection.add(slot(15, (9, 0), (9, 15))).expect("add");

    assert_eq!(
        starts(collection.entries()),
        vec![
            (15, time((9, 0))),
            (15, time((9, 0))),
            (15, time((14, 0))),
            (16, time((9, 0))),
        ]
    );
    assert_eq!(
        collection.get(0).map(|e| e.end_time()),
        Some(time((9, 15))),
        "equal starts are ordered by end time"
    );
}

#[test]
fn add_rejects_same_slot_even_with_different_candidate() {
    let mut collection = ScheduleCollection::new();
    collection
        .add(entry(15, (9, 0), (10, 0), "Amy"))
        .expect("first add");

    let duplicate = entry(15, (9, 0), (10, 0), "Bob").with_mode(InterviewMode::Offline);
    assert_eq!(
        collection.add(duplicate.clone()),
        Err(ScheduleError::DuplicateEntry {
            key: duplicate.key()
        })
    );
    assert_eq!(collection.len(), 1);
    assert!(collection.contains(&duplicate));
}

#[test]
fn add_does_not_check_temporal_clashes() {
    let mut collection = ScheduleCollection::new();
    collection.add(slot(15, (9, 0), (10, 0))).expect("add");
    collection
        .add(slot(15, (9, 30), (10, 30)))
        .expect("container leaves clash checks to the policy layer");
    assert_eq!(collection.len(), 2);
}

#[test]
fn remove_reports_missing_entry() {
    let mut collection = ScheduleCollection::new();
    let kept = slot(15, (9, 0), (10, 0));
    collection.add(kept.clone()).expect("add");

    let missing = slot(15, (11, 0), (12, 0));
    assert_eq!(
        collection.remove(&missing),
        Err(ScheduleError::EntryNotFound { key: missing.key() })
    );
    assert_eq!(collection.remove(&kept), Ok(kept));
    assert!(collection.is_empty());
    assert_eq!(
        collection.remove_at(0),
        Err(ScheduleError::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn replace_preserves_count_and_resorts() {
    let mut collection = ScheduleCollection::new();
    let early = slot(15, (9, 0), (10, 0));
    collection.add(early.clone()).expect("add");
    collection.add(slot(15, (11, 0), (12, 0))).expect("add");

    let moved = slot(15, (13, 0), (14, 0));
    collection
        .replace(&early, moved.clone())
        .expect("replace succeeds");

    assert_eq!(collection.len(), 2);
    assert!(!collection.contains(&early));
    assert!(collection.contains(&moved));
    assert_eq!(
        starts(collection.entries()),
        vec![(15, time((11, 0))), (15, time((13, 0)))]
    );
}

#[test]
fn replace_rejects_collision_with_another_entry() {
    let mut collection = ScheduleCollection::new();
    let first = slot(15, (9, 0), (10, 0));
    let second = slot(15, (11, 0), (12, 0));
    collection.add(first.clone()).expect("add");
    collection.add(second.clone()).expect("add");

    let result = collection.replace(&first, entry(15, (11, 0), (12, 0), "Bob"));
    assert_eq!(
        result,
        Err(ScheduleError::DuplicateEntry { key: second.key() })
    );
    assert_eq!(collection.entries(), &[first.clone(), second]);

    let absent = slot(20, (9, 0), (10, 0));
    assert_eq!(
        collection.replace(&absent, slot(21, (9, 0), (10, 0))),
        Err(ScheduleError::EntryNotFound { key: absent.key() })
    );

    let renamed = entry(15, (9, 0), (10, 0), "Carol");
    collection
        .replace(&first, renamed.clone())
        .expect("same slot may be replaced");
    assert_eq!(collection.get(0), Some(&renamed));
}

#[test]
fn set_all_rejects_duplicate_slots_before_commit() {
    let mut collection = ScheduleCollection::new();
    let existing = slot(10, (9, 0), (10, 0));
    collection.add(existing.clone()).expect("add");

    let result = collection.set_all(vec![
        entry(15, (9, 0), (10, 0), "Amy"),
        entry(15, (9, 0), (10, 0), "Bob"),
    ]);
    assert!(matches!(result, Err(ScheduleError::DuplicateEntry { .. })));
    assert_eq!(collection.entries(), &[existing]);

    collection
        .set_all(vec![slot(16, (9, 0), (10, 0)), slot(15, (9, 0), (10, 0))])
        .expect("distinct slots");
    assert_eq!(
        starts(collection.entries()),
        vec![(15, time((9, 0))), (16, time((9, 0)))]
    );
}

#[test]
fn filter_and_find_return_sorted_views() {
    let mut collection = ScheduleCollection::new();
    collection
        .set_all(vec![
            entry(16, (9, 0), (10, 0), "Amy"),
            entry(15, (9, 0), (10, 0), "Bob"),
            entry(15, (13, 0), (14, 0), "Amy"),
        ])
        .expect("distinct slots");

    let amy = collection.filter(|e| e.candidate().name == "Amy");
    assert_eq!(amy.len(), 2);
    assert_eq!(amy[0].date(), day(15));

    let key = slot(16, (9, 0), (10, 0)).key();
    assert_eq!(collection.position(&key), Some(2));
    assert!(collection.find(&key).is_some());
}
