use crate::unique_list::{Identified, UniqueList, UniqueListError};

use super::entry::{CandidateIdentity, ScheduleEntry, ScheduleKey};
use super::error::ScheduleError;

impl Identified for ScheduleEntry {
    fn same_identity(&self, other: &Self) -> bool {
        self.is_same_schedule(other)
    }
}

/// Sorted, slot-unique set of interviews.
///
/// Temporal clashes are not checked here; callers consult
/// [`super::ClashDetector`] before mutating.
#[derive(Debug, Clone, Default)]
pub struct ScheduleCollection {
    entries: UniqueList<ScheduleEntry>,
}

impl ScheduleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, entry: &ScheduleEntry) -> bool {
        self.entries.contains(entry)
    }

    pub fn add(&mut self, entry: ScheduleEntry) -> Result<(), ScheduleError> {
        let key = entry.key();
        let index = self.entries.sorted_position(&entry);
        self.entries
            .insert_at(index, entry)
            .map_err(|_| ScheduleError::DuplicateEntry { key })
    }

    pub fn remove(&mut self, entry: &ScheduleEntry) -> Result<ScheduleEntry, ScheduleError> {
        self.entries
            .remove(entry)
            .map_err(|_| ScheduleError::EntryNotFound { key: entry.key() })
    }

    pub fn remove_at(&mut self, index: usize) -> Result<ScheduleEntry, ScheduleError> {
        let len = self.entries.len();
        self.entries
            .remove_at(index)
            .ok_or(ScheduleError::IndexOutOfRange { index, len })
    }

    pub fn replace(
        &mut self,
        target: &ScheduleEntry,
        replacement: ScheduleEntry,
    ) -> Result<(), ScheduleError> {
        let replacement_key = replacement.key();
        let index = self
            .entries
            .replace(target, replacement)
            .map_err(|err| match err {
                UniqueListError::NotFound => ScheduleError::EntryNotFound { key: target.key() },
                UniqueListError::Duplicate => ScheduleError::DuplicateEntry {
                    key: replacement_key,
                },
            })?;
        self.entries.resort_at(index);
        Ok(())
    }

    /// Bulk replace used by import and reset.
    pub fn set_all(&mut self, mut entries: Vec<ScheduleEntry>) -> Result<(), ScheduleError> {
        entries.sort();
        self.entries
            .try_set_all(entries, |duplicate| ScheduleError::DuplicateEntry {
                key: duplicate.key(),
            })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&ScheduleEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, key: &ScheduleKey) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|entry| entry.key() == *key)
    }

    pub fn position(&self, key: &ScheduleKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == *key)
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&ScheduleEntry>
    where
        P: Fn(&ScheduleEntry) -> bool,
    {
        self.entries.iter().filter(|&entry| predicate(entry)).collect()
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        self.entries.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite the candidate snapshot of the entry at `key`. Position is unchanged
    /// because slots are unique and order by slot first.
    pub(crate) fn refresh_at(
        &mut self,
        key: &ScheduleKey,
        candidate: CandidateIdentity,
    ) -> Result<(), ScheduleError> {
        let index = self
            .position(key)
            .ok_or(ScheduleError::EntryNotFound { key: *key })?;
        if let Some(entry) = self.entries.get_mut(index) {
            entry.set_candidate(candidate);
        }
        Ok(())
    }

    pub(crate) fn refresh_matching(
        &mut self,
        previous: &CandidateIdentity,
        current: &CandidateIdentity,
    ) -> usize {
        let mut refreshed = 0;
        for entry in self.entries.iter_mut() {
            if entry.candidate() == previous {
                entry.set_candidate(current.clone());
                refreshed += 1;
            }
        }
        refreshed
    }
}

impl<'a> IntoIterator for &'a ScheduleCollection {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
