//! The editor controller: one card, one timeline, one debounce slot.
//!
//! `EditorState` is the single mutation entry point for a card. Every update
//! is merged into the working card synchronously so the preview is always
//! current; whether it also commits to history depends on the `immediate`
//! flag. Non-immediate updates share a single trailing-edge debounce slot:
//! a new update before the deadline cancels and reschedules it, so a burst
//! of slider ticks lands in history as exactly one commit.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::history::HistoryTimeline;
use crate::models::{Card, CardPreset, CardUpdate};

/// Pending trailing-edge commit scheduled by a non-immediate update.
///
/// At most one of these exists per editor; rescheduling replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCommit {
    /// When the working card should be committed
    deadline: Instant,
}

/// Zoom bounds for the preview viewport.
const MIN_ZOOM: f64 = 0.25;
const MAX_ZOOM: f64 = 2.0;

/// Owns the working card, its history timeline and the viewport zoom.
///
/// No two editor instances share state; the card and timeline belong
/// exclusively to this value.
#[derive(Debug, Clone)]
pub struct EditorState {
    timeline: HistoryTimeline,
    working: Card,
    pending: Option<PendingCommit>,
    debounce: Duration,
    zoom: f64,
}

impl EditorState {
    /// Creates an editor around an initial card.
    ///
    /// The timeline starts with the initial card as its only snapshot.
    #[must_use]
    pub fn new(initial: Card, max_history_size: usize, debounce: Duration) -> Self {
        Self {
            timeline: HistoryTimeline::new(initial.clone(), max_history_size),
            working: initial,
            pending: None,
            debounce,
            zoom: 1.0,
        }
    }

    /// The current working card (live preview state).
    #[must_use]
    pub const fn card(&self) -> &Card {
        &self.working
    }

    /// The history timeline, for position/capability display.
    #[must_use]
    pub const fn timeline(&self) -> &HistoryTimeline {
        &self.timeline
    }

    /// Current viewport zoom multiplier.
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    /// True while a debounced commit is waiting for its deadline.
    #[must_use]
    pub const fn has_pending_commit(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies a sparse update to the working card.
    ///
    /// With `immediate` set the merge commits to history synchronously;
    /// otherwise a single trailing-edge debounced commit is (re)scheduled.
    pub fn update_card(&mut self, update: &CardUpdate, immediate: bool) {
        self.update_card_at(update, immediate, Instant::now());
    }

    /// [`update_card`](Self::update_card) with an injectable clock, used by
    /// the event loop and tests.
    pub fn update_card_at(&mut self, update: &CardUpdate, immediate: bool, now: Instant) {
        self.working.apply(update);

        if immediate {
            self.pending = None;
            self.timeline.commit(self.working.clone());
            debug!(history_len = self.timeline.len(), "immediate commit");
        } else {
            self.pending = Some(PendingCommit {
                deadline: now + self.debounce,
            });
        }
    }

    /// Commits the pending debounced update if its deadline has passed.
    ///
    /// Called from the event loop on every tick. Returns true if a commit
    /// happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                self.timeline.commit(self.working.clone());
                debug!(history_len = self.timeline.len(), "debounced commit");
                true
            }
            _ => false,
        }
    }

    /// Commits a pending debounced update right now, deadline or not.
    ///
    /// Used before undo/redo and on teardown so a burst in flight is never
    /// silently dropped.
    pub fn flush_pending(&mut self) -> bool {
        if self.pending.take().is_some() {
            self.timeline.commit(self.working.clone());
            true
        } else {
            false
        }
    }

    /// True when an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.timeline.can_undo() || self.pending.is_some()
    }

    /// True when a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.timeline.can_redo()
    }

    /// Steps back one snapshot. No-op at the start of the timeline.
    ///
    /// A pending debounced commit is flushed first so the in-flight burst
    /// becomes the state being undone from.
    pub fn undo(&mut self) -> bool {
        self.flush_pending();
        if let Some(card) = self.timeline.undo() {
            self.working = card.clone();
            true
        } else {
            false
        }
    }

    /// Steps forward one snapshot. No-op at the end of the timeline.
    pub fn redo(&mut self) -> bool {
        self.flush_pending();
        if let Some(card) = self.timeline.redo() {
            self.working = card.clone();
            true
        } else {
            false
        }
    }

    /// Resets history to a single snapshot of the working card.
    pub fn clear_history(&mut self) {
        self.pending = None;
        self.timeline.clear(self.working.clone());
    }

    /// Applies a named preset as an immediate committed update.
    pub fn apply_preset(&mut self, preset: &CardPreset) {
        debug!(preset = preset.name, "applying preset");
        self.update_card(&preset.config, true);
    }

    /// Restores transform/filter/opacity adjustments to their defaults as an
    /// immediate committed update.
    pub fn reset_adjustments(&mut self) {
        self.update_card(&CardUpdate::reset_adjustments(), true);
    }

    /// Replaces the working card with a duplicate (fresh id, "(Copy)" title)
    /// and commits it.
    pub fn duplicate_card(&mut self) {
        self.pending = None;
        self.working = self.working.duplicate();
        self.timeline.commit(self.working.clone());
    }

    /// Sets the viewport zoom, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Steps the viewport zoom by the given delta.
    pub fn adjust_zoom(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }
}
