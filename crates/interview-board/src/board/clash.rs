use std::fmt;

use super::collection::ScheduleCollection;
use super::entry::{ScheduleEntry, ScheduleKey};
use super::error::IntegrityViolation;

/// Half-open interval intersection on the same date. Touching endpoints do not clash.
pub fn overlaps(a: &ScheduleEntry, b: &ScheduleEntry) -> bool {
    a.date() == b.date() && a.start_time() < b.end_time() && b.start_time() < a.end_time()
}

/// Number of entries overlapping `candidate`. With `exclude_self`, an entry occupying
/// the same slot as `candidate` is skipped.
pub fn count_clashes<'a, I>(entries: I, candidate: &ScheduleEntry, exclude_self: bool) -> usize
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    clashes_with(entries, candidate, exclude_self).len()
}

pub fn clashes_with<'a, I>(
    entries: I,
    candidate: &ScheduleEntry,
    exclude_self: bool,
) -> Vec<&'a ScheduleEntry>
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    entries
        .into_iter()
        .filter(|entry| !(exclude_self && entry.is_same_schedule(candidate)))
        .filter(|entry| overlaps(entry, candidate))
        .collect()
}

/// Check a batch of entries for repeated slots and mutual overlaps.
pub fn verify_consistency(entries: &[ScheduleEntry]) -> Result<(), IntegrityViolation> {
    for (i, first) in entries.iter().enumerate() {
        for second in &entries[i + 1..] {
            if first.is_same_schedule(second) {
                return Err(IntegrityViolation::Duplicate { key: first.key() });
            }
            if overlaps(first, second) {
                return Err(IntegrityViolation::Overlap {
                    first: first.key(),
                    second: second.key(),
                });
            }
        }
    }
    Ok(())
}

/// Counting rule applied when an existing entry is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClashPolicy {
    /// The entry being edited never counts against its own replacement.
    #[default]
    SelfExclusion,
    /// Size-dependent threshold kept for parity with older boards: a clash count of
    /// one is tolerated unless the board holds a single interview.
    LegacyThreshold,
}

impl ClashPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "self_exclusion" | "self-exclusion" | "default" => Some(Self::SelfExclusion),
            "legacy" | "legacy_threshold" | "legacy-threshold" => Some(Self::LegacyThreshold),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SelfExclusion => "self_exclusion",
            Self::LegacyThreshold => "legacy_threshold",
        }
    }
}

impl fmt::Display for ClashPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Temporal-consistency policy consulted before the collection is mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClashDetector {
    policy: ClashPolicy,
}

impl ClashDetector {
    pub const fn new(policy: ClashPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ClashPolicy {
        self.policy
    }

    /// `is_edit` means the collection still holds the pre-edit version of `candidate`.
    pub fn has_conflict(
        &self,
        collection: &ScheduleCollection,
        candidate: &ScheduleEntry,
        is_edit: bool,
    ) -> bool {
        match (is_edit, self.policy) {
            (false, _) => count_clashes(collection, candidate, false) > 0,
            (true, ClashPolicy::SelfExclusion) => count_clashes(collection, candidate, true) > 0,
            (true, ClashPolicy::LegacyThreshold) => {
                let clashes = count_clashes(collection, candidate, false);
                if collection.len() == 1 {
                    clashes > 0
                } else {
                    clashes > 1
                }
            }
        }
    }

    /// Whether replacing the entry at `target` with `replacement` is rejected. This is
    /// the same rule [`ScheduleBoard::replace`](super::ScheduleBoard::replace) enforces.
    pub fn has_edit_conflict(
        &self,
        collection: &ScheduleCollection,
        target: &ScheduleKey,
        replacement: &ScheduleEntry,
    ) -> bool {
        !self.edit_clashes(collection, target, replacement).is_empty()
    }

    pub fn insertion_clashes<'a>(
        &self,
        collection: &'a ScheduleCollection,
        candidate: &ScheduleEntry,
    ) -> Vec<&'a ScheduleEntry> {
        clashes_with(collection, candidate, false)
    }

    /// Entries that would clash once `target` is replaced by `replacement`.
    ///
    /// Under self-exclusion the entry being edited is ignored even when the edit moves
    /// it to a different slot.
    pub fn edit_clashes<'a>(
        &self,
        collection: &'a ScheduleCollection,
        target: &ScheduleKey,
        replacement: &ScheduleEntry,
    ) -> Vec<&'a ScheduleEntry> {
        match self.policy {
            ClashPolicy::SelfExclusion => clashes_with(collection, replacement, true)
                .into_iter()
                .filter(|entry| entry.key() != *target)
                .collect(),
            ClashPolicy::LegacyThreshold => {
                if self.has_conflict(collection, replacement, true) {
                    clashes_with(collection, replacement, false)
                } else {
                    Vec::new()
                }
            }
        }
    }
}
