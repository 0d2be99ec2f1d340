use crate::{DEFAULT_HISTORY_CAPACITY, RestartHistory};

use rc_core::{RestartHistoryEntry, RestartReason};

fn entry(n: usize) -> RestartHistoryEntry {
    RestartHistoryEntry::new(RestartReason::Manual, format!("admin-{n}"), "test")
}

#[test]
fn given_new_history_then_empty_with_default_capacity() {
    let history = RestartHistory::default();

    assert!(history.is_empty());
    assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    assert_eq!(history.latest(), None);
}

#[test]
fn given_full_history_when_51st_pushed_then_oldest_evicted() {
    // Given
    let mut history = RestartHistory::default();
    for n in 0..50 {
        history.push(entry(n));
    }

    // When
    history.push(entry(50));

    // Then
    let snapshot = history.snapshot();
    assert_eq!(snapshot.len(), 50);
    assert_eq!(snapshot[0].initiator, "admin-1");
    assert_eq!(snapshot[49].initiator, "admin-50");
    assert_eq!(history.latest().unwrap().initiator, "admin-50");
}

#[test]
fn given_snapshot_when_history_changes_then_snapshot_unaffected() {
    let mut history = RestartHistory::new(3);
    history.push(entry(0));

    let snapshot = history.snapshot();
    history.push(entry(1));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(history.len(), 2);
}

#[test]
fn given_zero_capacity_when_pushed_then_nothing_retained() {
    let mut history = RestartHistory::new(0);

    history.push(entry(0));

    assert!(history.is_empty());
}
