//! Keeps candidate snapshots on the board in step with the person registry.
//!
//! Entries copy a candidate's name and email when they are created. When the registry
//! edits that person, it emits an [`IdentityChange`]; the affected entries stay stale
//! until the change is drained into the collection. Nothing flows the other way.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::collection::ScheduleCollection;
use super::entry::{CandidateIdentity, ScheduleEntry};
use super::error::ScheduleError;

/// A person's identity before and after an edit in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityChange {
    pub previous: CandidateIdentity,
    pub current: CandidateIdentity,
}

impl IdentityChange {
    pub fn new(previous: CandidateIdentity, current: CandidateIdentity) -> Self {
        Self { previous, current }
    }

    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

/// Overwrite the candidate snapshot of `target` without moving it.
pub fn refresh_candidate(
    collection: &mut ScheduleCollection,
    target: &ScheduleEntry,
    new_name: &str,
    new_email: &str,
) -> Result<(), ScheduleError> {
    collection.refresh_at(&target.key(), CandidateIdentity::new(new_name, new_email))
}

/// Queue of identity changes waiting to be applied to the board.
#[derive(Debug, Clone, Default)]
pub struct CandidateSync {
    pending: VecDeque<IdentityChange>,
}

impl CandidateSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single change to every entry still showing the previous identity.
    pub fn apply(collection: &mut ScheduleCollection, change: &IdentityChange) -> usize {
        if change.is_noop() {
            return 0;
        }
        let refreshed = collection.refresh_matching(&change.previous, &change.current);
        debug!(
            previous = %change.previous,
            current = %change.current,
            refreshed,
            "refreshed candidate snapshots"
        );
        refreshed
    }

    pub fn notify(&mut self, change: IdentityChange) {
        if !change.is_noop() {
            self.pending.push_back(change);
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// True when `entry` shows an identity that a queued change will overwrite.
    pub fn is_stale(&self, entry: &ScheduleEntry) -> bool {
        self.pending
            .iter()
            .any(|change| change.previous == *entry.candidate())
    }

    /// Apply queued changes in arrival order and return how many entries changed.
    pub fn drain_into(&mut self, collection: &mut ScheduleCollection) -> usize {
        self.pending
            .drain(..)
            .map(|change| Self::apply(collection, &change))
            .sum()
    }
}
