use plankit_core::{Point, Wall};
use plankit_editor::HistoryLog;

fn wall(x: f64) -> Wall {
    Wall::new(Point::new(0.0, 0.0), Point::new(x, 0.0), 280.0, false)
}

#[test]
fn log_starts_with_the_empty_snapshot() {
    let log = HistoryLog::new(50);
    assert_eq!(log.len(), 1);
    assert!(!log.can_undo());
    assert!(!log.can_redo());
    assert!(log.current().walls.is_empty());
}

#[test]
fn undo_walks_back_to_the_first_commit() {
    let mut log = HistoryLog::new(50);
    let walls: Vec<Wall> = (1..=4).map(|i| wall(i as f64 * 100.0)).collect();

    for i in 1..=4 {
        log.commit(&walls[..i], &[]);
    }

    // N commits, N-1 undos: back at the first committed state.
    for _ in 0..3 {
        assert!(log.undo().is_some());
    }
    assert_eq!(log.current().walls.len(), 1);
    assert_eq!(log.current().walls[0].end.x, 100.0);
}

#[test]
fn redo_restores_the_pre_undo_state() {
    let mut log = HistoryLog::new(50);
    log.commit(&[wall(100.0)], &[]);
    log.commit(&[wall(100.0), wall(200.0)], &[]);

    log.undo();
    let redone = log.redo().expect("redo available");
    assert_eq!(redone.walls.len(), 2);
    assert!(!log.can_redo());
}

#[test]
fn commit_after_undo_discards_the_redo_branch() {
    let mut log = HistoryLog::new(50);
    log.commit(&[wall(100.0)], &[]);
    log.commit(&[wall(100.0), wall(200.0)], &[]);

    log.undo();
    assert!(log.can_redo());

    log.commit(&[wall(999.0)], &[]);
    assert!(!log.can_redo());
    assert!(log.redo().is_none());
    assert_eq!(log.current().walls[0].end.x, 999.0);
}

#[test]
fn undo_at_the_start_is_a_noop() {
    let mut log = HistoryLog::new(50);
    assert!(log.undo().is_none());
    assert!(log.undo().is_none());
    assert_eq!(log.len(), 1);
}

#[test]
fn redo_at_the_end_is_a_noop() {
    let mut log = HistoryLog::new(50);
    log.commit(&[wall(100.0)], &[]);
    assert!(log.redo().is_none());
}

#[test]
fn capacity_evicts_the_oldest_entry() {
    let mut log = HistoryLog::new(3);
    for i in 1..=5 {
        log.commit(&[wall(i as f64 * 100.0)], &[]);
    }

    assert_eq!(log.len(), 3);
    // Undoing to the floor lands on the oldest surviving entry, not
    // the initial empty snapshot.
    while log.can_undo() {
        log.undo();
    }
    assert_eq!(log.current().walls[0].end.x, 300.0);
}

#[test]
fn snapshots_are_independent_copies() {
    let mut log = HistoryLog::new(50);
    let mut walls = vec![wall(100.0)];
    log.commit(&walls, &[]);

    // Mutating the live document must not alter the stored snapshot.
    walls[0].end.x = 777.0;
    assert_eq!(log.current().walls[0].end.x, 100.0);
}
