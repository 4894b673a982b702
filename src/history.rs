//! Undo/redo history over card snapshots.
//!
//! The timeline is a linear, append-only (but truncatable) sequence of
//! immutable card snapshots with a cursor pointing at the current position.
//! Committing after an undo discards the abandoned future permanently; there
//! is no tree of alternate branches. Length is bounded: once the maximum is
//! reached the oldest snapshot is evicted.

use crate::models::Card;

/// Default maximum number of snapshots kept in a timeline.
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 50;

/// Linear snapshot timeline with a cursor, bounded to a maximum length.
#[derive(Debug, Clone)]
pub struct HistoryTimeline {
    /// Recorded snapshots, oldest first
    snapshots: Vec<Card>,
    /// Index of the current snapshot
    cursor: usize,
    /// Upper bound on `snapshots.len()`
    max_size: usize,
}

impl HistoryTimeline {
    /// Creates a timeline seeded with one snapshot and the cursor on it.
    ///
    /// `max_size` is floored at 1: a timeline always holds at least the
    /// current snapshot.
    #[must_use]
    pub fn new(initial: Card, max_size: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_size: max_size.max(1),
        }
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &Card {
        &self.snapshots[self.cursor]
    }

    /// Number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when the timeline holds no snapshots. Never the case in practice;
    /// provided for completeness alongside [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor position (0-based).
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when an undo step is available.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True when a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.snapshots.len() - 1
    }

    /// Records a new snapshot as the current position.
    ///
    /// Any snapshots past the cursor (the redo branch) are discarded first.
    /// If the timeline would exceed its maximum length, the oldest snapshot
    /// is evicted and the cursor adjusted so it still points at the snapshot
    /// just committed.
    pub fn commit(&mut self, snapshot: Card) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;

        if self.snapshots.len() > self.max_size {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
    }

    /// Steps the cursor back one snapshot and returns it.
    ///
    /// No-op returning `None` at the start of the timeline.
    pub fn undo(&mut self) -> Option<&Card> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Steps the cursor forward one snapshot and returns it.
    ///
    /// No-op returning `None` at the end of the timeline.
    pub fn redo(&mut self) -> Option<&Card> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Resets to a single-entry timeline holding only `current`.
    pub fn clear(&mut self, current: Card) {
        self.snapshots = vec![current];
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardUpdate;

    fn card_titled(title: &str) -> Card {
        let mut card = Card::default();
        card.title = title.to_string();
        card
    }

    #[test]
    fn test_new_timeline_has_one_entry() {
        let timeline = HistoryTimeline::new(Card::default(), 50);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.cursor(), 0);
        assert!(!timeline.can_undo());
        assert!(!timeline.can_redo());
    }

    #[test]
    fn test_commit_advances_cursor() {
        let mut timeline = HistoryTimeline::new(card_titled("a"), 50);
        timeline.commit(card_titled("b"));
        timeline.commit(card_titled("c"));

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cursor(), 2);
        assert_eq!(timeline.current().title, "c");
        assert!(timeline.can_undo());
        assert!(!timeline.can_redo());
    }

    #[test]
    fn test_undo_redo_round_trip_is_bit_identical() {
        let mut timeline = HistoryTimeline::new(card_titled("a"), 50);
        let b = card_titled("b").with_update(&CardUpdate {
            card_width: Some(400),
            gradient_angle: Some(90),
            ..CardUpdate::default()
        });
        timeline.commit(b.clone());
        timeline.commit(card_titled("c"));

        timeline.undo();
        assert_eq!(timeline.current(), &b);
        timeline.redo();
        timeline.undo();
        // Full state restored, every field included
        assert_eq!(timeline.current(), &b);
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut timeline = HistoryTimeline::new(card_titled("a"), 50);
        assert!(timeline.undo().is_none());
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.current().title, "a");
    }

    #[test]
    fn test_redo_at_end_is_noop() {
        let mut timeline = HistoryTimeline::new(card_titled("a"), 50);
        timeline.commit(card_titled("b"));
        assert!(timeline.redo().is_none());
        assert_eq!(timeline.cursor(), 1);
    }

    #[test]
    fn test_commit_truncates_redo_branch() {
        let mut timeline = HistoryTimeline::new(card_titled("a"), 50);
        timeline.commit(card_titled("b"));
        timeline.commit(card_titled("c"));
        timeline.undo();
        assert!(timeline.can_redo());

        timeline.commit(card_titled("d"));
        // "c" is unreachable now
        assert!(!timeline.can_redo());
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.current().title, "d");
        timeline.redo();
        assert_eq!(timeline.current().title, "d");
    }

    #[test]
    fn test_bounded_length_evicts_oldest() {
        let mut timeline = HistoryTimeline::new(card_titled("0"), 3);
        timeline.commit(card_titled("1"));
        timeline.commit(card_titled("2"));
        assert_eq!(timeline.len(), 3);

        timeline.commit(card_titled("3"));
        assert_eq!(timeline.len(), 3);
        // Oldest evicted; cursor still on the just-committed snapshot
        assert_eq!(timeline.current().title, "3");
        assert_eq!(timeline.cursor(), 2);

        // can_undo stays correct relative to the new bounds
        assert!(timeline.can_undo());
        timeline.undo();
        timeline.undo();
        assert_eq!(timeline.current().title, "1");
        assert!(!timeline.can_undo());
    }

    #[test]
    fn test_clear_resets_to_single_entry() {
        let mut timeline = HistoryTimeline::new(card_titled("a"), 50);
        timeline.commit(card_titled("b"));
        timeline.commit(card_titled("c"));

        timeline.clear(card_titled("c"));
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.current().title, "c");
        assert!(!timeline.can_undo());
        assert!(!timeline.can_redo());
    }

    #[test]
    fn test_max_size_floored_at_one() {
        let mut timeline = HistoryTimeline::new(card_titled("a"), 0);
        timeline.commit(card_titled("b"));
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.current().title, "b");
    }
}
