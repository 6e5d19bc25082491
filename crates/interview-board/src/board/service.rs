use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use super::clash::{ClashDetector, ClashPolicy};
use super::collection::ScheduleCollection;
use super::entry::{CandidateIdentity, InterviewMode, ScheduleEntry, ValidationError};
use super::error::ScheduleError;
use super::sync::{CandidateSync, IdentityChange};

/// Fields to change on an existing interview. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleEdit {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub mode: Option<InterviewMode>,
    pub candidate: Option<CandidateIdentity>,
}

impl ScheduleEdit {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.mode.is_none()
            && self.candidate.is_none()
    }

    pub fn apply_to(&self, entry: &ScheduleEntry) -> Result<ScheduleEntry, ValidationError> {
        ScheduleEntry::new(
            self.date.unwrap_or(entry.date()),
            self.start_time.unwrap_or(entry.start_time()),
            self.end_time.unwrap_or(entry.end_time()),
            self.mode.unwrap_or(entry.mode()),
            self.candidate
                .clone()
                .unwrap_or_else(|| entry.candidate().clone()),
        )
    }
}

/// Command-layer facade over the collection, the clash policy and candidate sync.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBoard {
    collection: ScheduleCollection,
    detector: ClashDetector,
    sync: CandidateSync,
}

impl ScheduleBoard {
    pub fn new(policy: ClashPolicy) -> Self {
        Self {
            collection: ScheduleCollection::new(),
            detector: ClashDetector::new(policy),
            sync: CandidateSync::new(),
        }
    }

    pub fn with_entries(
        policy: ClashPolicy,
        entries: Vec<ScheduleEntry>,
    ) -> Result<Self, ScheduleError> {
        let mut board = Self::new(policy);
        board.set_all(entries)?;
        Ok(board)
    }

    pub fn policy(&self) -> ClashPolicy {
        self.detector.policy()
    }

    pub fn collection(&self) -> &ScheduleCollection {
        &self.collection
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        self.collection.entries()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&ScheduleEntry, ScheduleError> {
        self.collection
            .get(index)
            .ok_or(ScheduleError::IndexOutOfRange {
                index,
                len: self.collection.len(),
            })
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&ScheduleEntry>
    where
        P: Fn(&ScheduleEntry) -> bool,
    {
        self.collection.filter(predicate)
    }

    /// With `is_edit`, `candidate` is taken to be an edit that keeps its own slot. Use
    /// [`Self::has_edit_conflict`] for edits that move an interview.
    pub fn has_conflict(&self, candidate: &ScheduleEntry, is_edit: bool) -> bool {
        if is_edit {
            self.has_edit_conflict(candidate, candidate)
        } else {
            self.detector.has_conflict(&self.collection, candidate, false)
        }
    }

    /// True exactly when [`Self::replace`] would reject `replacement` with a conflict.
    pub fn has_edit_conflict(&self, target: &ScheduleEntry, replacement: &ScheduleEntry) -> bool {
        self.detector
            .has_edit_conflict(&self.collection, &target.key(), replacement)
    }

    /// Schedule a new interview after checking it against every existing slot.
    pub fn add(&mut self, entry: ScheduleEntry) -> Result<(), ScheduleError> {
        if self.collection.contains(&entry) {
            return Err(ScheduleError::DuplicateEntry { key: entry.key() });
        }

        let clashes = self.detector.insertion_clashes(&self.collection, &entry);
        if !clashes.is_empty() {
            return Err(ScheduleError::Conflict {
                key: entry.key(),
                clashes: clashes.iter().map(|clash| clash.key()).collect(),
            });
        }

        info!(slot = %entry.key(), candidate = %entry.candidate(), "interview scheduled");
        self.collection.add(entry)
    }

    /// Swap `target` for `replacement`, ignoring `target` itself when looking for clashes.
    pub fn replace(
        &mut self,
        target: &ScheduleEntry,
        replacement: ScheduleEntry,
    ) -> Result<(), ScheduleError> {
        if !self.collection.contains(target) {
            return Err(ScheduleError::EntryNotFound { key: target.key() });
        }

        let clashes = self
            .detector
            .edit_clashes(&self.collection, &target.key(), &replacement);
        if !clashes.is_empty() {
            return Err(ScheduleError::Conflict {
                key: replacement.key(),
                clashes: clashes.iter().map(|clash| clash.key()).collect(),
            });
        }

        info!(from = %target.key(), to = %replacement.key(), "interview updated");
        self.collection.replace(target, replacement)
    }

    /// Apply `edit` to the interview at `index` and return the stored result.
    pub fn edit(
        &mut self,
        index: usize,
        edit: &ScheduleEdit,
    ) -> Result<ScheduleEntry, ScheduleError> {
        let target = self.get(index)?.clone();
        let replacement = edit.apply_to(&target)?;
        self.replace(&target, replacement.clone())?;
        Ok(replacement)
    }

    pub fn remove(&mut self, index: usize) -> Result<ScheduleEntry, ScheduleError> {
        let removed = self.collection.remove_at(index)?;
        info!(slot = %removed.key(), "interview removed");
        Ok(removed)
    }

    pub fn remove_entry(&mut self, entry: &ScheduleEntry) -> Result<ScheduleEntry, ScheduleError> {
        let removed = self.collection.remove(entry)?;
        info!(slot = %removed.key(), "interview removed");
        Ok(removed)
    }

    /// Replace every interview at once. Only slot uniqueness is checked; callers loading
    /// persisted data verify temporal consistency first.
    pub fn set_all(&mut self, entries: Vec<ScheduleEntry>) -> Result<(), ScheduleError> {
        let count = entries.len();
        self.collection.set_all(entries)?;
        debug!(count, "schedule board replaced");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.collection.clear();
        info!("schedule board cleared");
    }

    /// Queue a registry edit. Entries showing the old identity are stale until
    /// [`Self::sync_candidates`] runs.
    pub fn notify_person_edited(&mut self, change: IdentityChange) {
        self.sync.notify(change);
    }

    pub fn has_stale_snapshots(&self) -> bool {
        self.collection.iter().any(|entry| self.sync.is_stale(entry))
    }

    pub fn sync_candidates(&mut self) -> usize {
        let refreshed = self.sync.drain_into(&mut self.collection);
        if refreshed > 0 {
            info!(refreshed, "candidate snapshots synchronized");
        }
        refreshed
    }
}
