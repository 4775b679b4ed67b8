//! Unsaved-change tracking.

use std::time::{Duration, Instant};

use super::AutoSavePolicy;

/// Tracks whether the in-memory project differs from its file.
///
/// Every mutation bumps a revision counter; saving or loading records the
/// current revision as the persisted one.
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    revision: u64,
    saved_revision: u64,

    /// When the most recent change was made.
    last_change: Option<Instant>,

    /// When the first change since the last save was made.
    first_unsaved_change: Option<Instant>,
}

impl ChangeTracker {
    /// Create a tracker with no unsaved changes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are unsaved changes.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.revision != self.saved_revision
    }

    /// Number of changes recorded since the tracker was created.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Record a change.
    pub fn mark_dirty(&mut self) {
        let now = Instant::now();
        self.revision += 1;
        self.last_change = Some(now);
        if self.first_unsaved_change.is_none() {
            self.first_unsaved_change = Some(now);
        }
    }

    /// Record that the current state matches the file.
    pub fn mark_saved(&mut self) {
        self.saved_revision = self.revision;
        self.first_unsaved_change = None;
    }

    /// Time since the last change.
    pub fn since_last_change(&self) -> Option<Duration> {
        self.last_change.map(|t| t.elapsed())
    }

    /// Time since the first unsaved change.
    pub fn since_first_unsaved(&self) -> Option<Duration> {
        self.first_unsaved_change.map(|t| t.elapsed())
    }

    /// Check if auto-save should trigger under the policy.
    pub fn should_auto_save(&self, policy: &AutoSavePolicy) -> bool {
        if !self.is_dirty() {
            return false;
        }
        match (self.since_last_change(), self.since_first_unsaved()) {
            (Some(since_last), Some(since_first)) => policy.is_due(since_last, since_first),
            _ => false,
        }
    }
}
