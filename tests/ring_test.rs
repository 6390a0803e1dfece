mod common;

use boxing_ring::core::ring::{fighting_skill, win_probability};
use boxing_ring::{Boxer, BoxerStore, FightOutcome, Ring, RingError};
use common::{evenly_matched, new_boxer, RecordingStore, ScriptedRandom};

fn ring_with(
    store: RecordingStore,
    draws: &[f64],
) -> Ring<RecordingStore, ScriptedRandom> {
    Ring::new(store, ScriptedRandom::new(draws))
}

fn boxer(id: u64, name: &str) -> Boxer {
    Boxer::new(id, name, 150, 70, 12.5, 30).unwrap()
}

#[test]
fn test_enter_ring() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    ring.enter_ring(boxer(1, "Boxer 1")).unwrap();

    let boxers = ring.get_boxers().unwrap();
    assert_eq!(boxers.len(), 1);
    assert_eq!(boxers[0].name(), "Boxer 1");
}

#[test]
fn test_add_duplicate_boxer_to_ring() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    ring.enter_ring(boxer(1, "Boxer 1")).unwrap();

    let err = ring.enter_ring(boxer(1, "Boxer 1")).unwrap_err();
    assert!(matches!(err, RingError::DuplicateError { id: 1 }));
    assert_eq!(err.to_string(), "Boxer with ID 1 already exists in the ring");
    assert_eq!(ring.occupancy(), 1);
}

#[test]
fn test_duplicate_id_checked_against_every_occupant() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    ring.enter_ring(boxer(1, "Boxer 1")).unwrap();
    // same id, different snapshot of the record
    let renamed = Boxer::new(1, "Renamed", 200, 70, 12.5, 30).unwrap();
    assert!(matches!(
        ring.enter_ring(renamed),
        Err(RingError::DuplicateError { id: 1 })
    ));
}

#[test]
fn test_add_third_boxer_to_ring() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    ring.enter_ring(boxer(1, "Boxer 1")).unwrap();
    ring.enter_ring(boxer(2, "Boxer 2")).unwrap();

    let err = ring.enter_ring(boxer(3, "Boxer 3")).unwrap_err();
    assert!(matches!(err, RingError::CapacityError { capacity: 2 }));
    assert_eq!(err.to_string(), "Ring is full, cannot add more boxers.");

    let ids: Vec<u64> = ring.get_boxers().unwrap().iter().map(|b| b.id()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_full_ring_reports_capacity_before_duplicate() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    ring.enter_ring(boxer(1, "Boxer 1")).unwrap();
    ring.enter_ring(boxer(2, "Boxer 2")).unwrap();
    assert!(matches!(
        ring.enter_ring(boxer(1, "Boxer 1")),
        Err(RingError::CapacityError { .. })
    ));
}

#[test]
fn test_get_boxers_keeps_entry_order() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    ring.enter_ring(boxer(2, "Boxer 2")).unwrap();
    ring.enter_ring(boxer(1, "Boxer 1")).unwrap();

    let boxers = ring.get_boxers().unwrap();
    assert_eq!(boxers[0].id(), 2);
    assert_eq!(boxers[1].id(), 1);
}

#[test]
fn test_get_boxers_empty() {
    let ring = ring_with(RecordingStore::default(), &[]);
    let err = ring.get_boxers().unwrap_err();
    assert!(matches!(err, RingError::EmptyStateError { .. }));
    assert_eq!(err.to_string(), "Ring is empty");
}

#[test]
fn test_clear_ring() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    ring.enter_ring(boxer(1, "Boxer 1")).unwrap();
    ring.clear_ring();
    assert!(ring.is_empty());

    ring.enter_ring(boxer(1, "Boxer 1")).unwrap();
    ring.enter_ring(boxer(2, "Boxer 2")).unwrap();
    ring.clear_ring();
    assert!(ring.is_empty());
    assert!(ring.get_boxers().is_err());
}

#[test]
fn test_clear_ring_is_idempotent() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    ring.clear_ring();
    assert_eq!(ring.occupancy(), 0);
    ring.clear_ring();
    assert_eq!(ring.occupancy(), 0);
}

#[test]
fn test_get_fighting_skill() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    let veteran = Boxer::new(1, "Boxer 1", 150, 60, 12.5, 37).unwrap();

    let first = ring.get_fighting_skill(&veteran);
    let second = ring.get_fighting_skill(&veteran);
    assert_eq!(first, 1049.25);
    assert_eq!(first, second);
    assert_eq!(first, fighting_skill(&veteran));
}

#[test]
fn test_fight_with_empty_ring() {
    let mut ring = ring_with(RecordingStore::default(), &[]);
    let err = ring.fight().unwrap_err();
    assert_eq!(err.to_string(), "There must be two boxers to start a fight.");
    assert!(ring.store().updates.is_empty());
}

#[test]
fn test_fight_with_one_boxer_leaves_store_untouched() {
    let store = RecordingStore::with_boxers(&evenly_matched());
    let first = store.get_boxer_by_id(1).unwrap();
    let mut ring = ring_with(store, &[]);
    ring.enter_ring(first).unwrap();

    assert!(matches!(ring.fight(), Err(RingError::EmptyStateError { .. })));
    assert!(ring.store().updates.is_empty());
    assert_eq!(ring.occupancy(), 1);
}

#[test]
fn test_fight_current_boxers() {
    let store = RecordingStore::with_boxers(&evenly_matched());
    let b1 = store.get_boxer_by_id(1).unwrap();
    let b2 = store.get_boxer_by_id(2).unwrap();
    // equal skill: probability 0.5, so 0.7 goes to the second boxer
    let mut ring = ring_with(store, &[0.7]);
    ring.enter_ring(b1).unwrap();
    ring.enter_ring(b2).unwrap();

    let winner = ring.fight().unwrap();

    assert_eq!(winner, "Boxer 2");
    assert_eq!(
        ring.store().updates,
        vec![(2, FightOutcome::Win), (1, FightOutcome::Loss)]
    );
    assert!(ring.is_empty());

    let board = ring.store().get_leaderboard(Default::default()).unwrap();
    assert_eq!(board[0].name, "Boxer 2");
    assert_eq!((board[0].fights, board[0].wins), (1, 1));
    assert_eq!((board[1].fights, board[1].wins), (1, 0));
}

#[test]
fn test_fight_low_roll_favours_first_boxer() {
    let store = RecordingStore::with_boxers(&evenly_matched());
    let b1 = store.get_boxer_by_id(1).unwrap();
    let b2 = store.get_boxer_by_id(2).unwrap();
    let mut ring = ring_with(store, &[0.49]);
    ring.enter_ring(b1).unwrap();
    ring.enter_ring(b2).unwrap();

    assert_eq!(ring.fight().unwrap(), "Boxer 1");
    assert_eq!(
        ring.store().updates,
        vec![(1, FightOutcome::Win), (2, FightOutcome::Loss)]
    );
}

#[test]
fn test_fight_roll_at_threshold_goes_to_second_boxer() {
    let store = RecordingStore::with_boxers(&evenly_matched());
    let b1 = store.get_boxer_by_id(1).unwrap();
    let b2 = store.get_boxer_by_id(2).unwrap();
    let mut ring = ring_with(store, &[0.5]);
    ring.enter_ring(b1).unwrap();
    ring.enter_ring(b2).unwrap();

    assert_eq!(ring.fight().unwrap(), "Boxer 2");
}

#[test]
fn test_fight_reports_exactly_two_updates() {
    let store = RecordingStore::with_boxers(&[
        new_boxer("Ali", 180, 74.0, 30),
        new_boxer("Foreman", 220, 78.5, 38),
    ]);
    let ali = store.get_boxer_by_name("Ali").unwrap();
    let foreman = store.get_boxer_by_name("Foreman").unwrap();
    let mut ring = ring_with(store, &[0.3, 0.9]);

    ring.enter_ring(ali.clone()).unwrap();
    ring.enter_ring(foreman.clone()).unwrap();
    let winner = ring.fight().unwrap();

    assert!(winner == "Ali" || winner == "Foreman");
    let updates = &ring.store().updates;
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].1, FightOutcome::Win);
    assert_eq!(updates[1].1, FightOutcome::Loss);
    assert_ne!(updates[0].0, updates[1].0);
    assert!(ring.is_empty());

    // the ring is reusable after a fight
    ring.enter_ring(foreman).unwrap();
    ring.enter_ring(ali).unwrap();
    ring.fight().unwrap();
    assert_eq!(ring.store().updates.len(), 4);
}

#[test]
fn test_fight_clears_ring_when_store_fails() {
    let mut store = RecordingStore::with_boxers(&evenly_matched());
    store.fail_updates = true;
    let b1 = store.get_boxer_by_id(1).unwrap();
    let b2 = store.get_boxer_by_id(2).unwrap();
    let mut ring = ring_with(store, &[0.1]);
    ring.enter_ring(b1).unwrap();
    ring.enter_ring(b2).unwrap();

    assert!(matches!(ring.fight(), Err(RingError::IoError(_))));
    assert!(ring.is_empty());
    // the loss is not reported once the win failed
    assert_eq!(ring.store().updates, vec![(1, FightOutcome::Win)]);
}

#[test]
fn test_fight_with_deleted_boxer_propagates_not_found() {
    let store = RecordingStore::with_boxers(&evenly_matched());
    let b1 = store.get_boxer_by_id(1).unwrap();
    let b2 = store.get_boxer_by_id(2).unwrap();
    let mut ring = ring_with(store, &[0.9]);
    ring.enter_ring(b1).unwrap();
    ring.enter_ring(b2).unwrap();
    ring.store_mut().delete_boxer(2).unwrap();

    assert!(matches!(
        ring.fight(),
        Err(RingError::BoxerNotFound { id: 2 })
    ));
    assert!(ring.is_empty());
}

#[test]
fn test_win_probability_bounds() {
    for (a, b) in [(0.0, 0.0), (1000.0, 999.5), (10.0, 2000.0), (1.0, 1.0e6)] {
        let p = win_probability(a, b);
        assert!((0.5..=1.0).contains(&p), "p = {}", p);
    }
    assert!(win_probability(0.0, 2.0) > win_probability(0.0, 1.0));
}
