//! Linear, bounded undo/redo over full-document snapshots.
//!
//! Snapshots are independent deep copies: mutating the live document
//! after a commit can never alter an entry already in the log.

use plankit_core::{PlacedObject, Wall};
use tracing::debug;

/// Default number of entries kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// An immutable snapshot of the editable document state at a commit
/// point.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub walls: Vec<Wall>,
    pub objects: Vec<PlacedObject>,
}

impl HistorySnapshot {
    fn empty() -> Self {
        Self {
            walls: Vec::new(),
            objects: Vec::new(),
        }
    }
}

/// The undo/redo log: an ordered sequence of snapshots plus the current
/// index.
///
/// Invariants:
/// - the log always contains at least one entry (the initial empty
///   document), so index 0 is always defined and undo never produces an
///   undefined state;
/// - `index < entries.len()` at all times;
/// - committing while not at the end discards the redo tail first
///   (standard linear undo/redo).
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<HistorySnapshot>,
    index: usize,
    capacity: usize,
}

impl HistoryLog {
    /// Creates a log seeded with the empty initial snapshot. A capacity
    /// below 2 is bumped so that at least one undo step is available.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![HistorySnapshot::empty()],
            index: 0,
            capacity: capacity.max(2),
        }
    }

    /// Appends a deep copy of the current document state.
    ///
    /// Any redo entries beyond the current index are discarded; when
    /// the log outgrows its capacity the oldest entry is evicted.
    pub fn commit(&mut self, walls: &[Wall], objects: &[PlacedObject]) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistorySnapshot {
            walls: walls.to_vec(),
            objects: objects.to_vec(),
        });
        self.index += 1;

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
            self.index -= 1;
        }
    }

    /// Steps back one entry and returns the snapshot to restore, or
    /// `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        if self.index == 0 {
            debug!("undo requested at start of history");
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Steps forward one entry and returns the snapshot to restore, or
    /// `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        if self.index + 1 >= self.entries.len() {
            debug!("redo requested at end of history");
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of entries currently in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // The log is never truly empty; kept for iterator-like APIs.
        self.entries.is_empty()
    }

    /// The snapshot at the current index.
    pub fn current(&self) -> &HistorySnapshot {
        &self.entries[self.index]
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
