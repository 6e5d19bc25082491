//! Identity-checked list shared by the schedule collection and the person registry.
//!
//! Identity is decided by [`Identified::same_identity`], which is usually looser than
//! `PartialEq`: two schedule entries can differ in mode yet still occupy the same slot.

/// Types stored in a [`UniqueList`].
pub trait Identified {
    fn same_identity(&self, other: &Self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UniqueListError {
    #[error("an element with the same identity already exists")]
    Duplicate,
    #[error("element not found")]
    NotFound,
}

#[derive(Debug, Clone)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.same_identity(item))
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|existing| existing.same_identity(item))
    }

    pub fn push(&mut self, item: T) -> Result<(), UniqueListError> {
        let index = self.items.len();
        self.insert_at(index, item)
    }

    /// Insert at `index`, clamped to the end of the list.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), UniqueListError> {
        if self.contains(&item) {
            return Err(UniqueListError::Duplicate);
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        Ok(())
    }

    pub fn remove(&mut self, item: &T) -> Result<T, UniqueListError> {
        let index = self.position(item).ok_or(UniqueListError::NotFound)?;
        Ok(self.items.remove(index))
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Swap `target` for `replacement` in place and return the slot it landed in.
    ///
    /// `replacement` may share the identity of `target` but of no other element.
    pub fn replace(&mut self, target: &T, replacement: T) -> Result<usize, UniqueListError> {
        let index = self.position(target).ok_or(UniqueListError::NotFound)?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.same_identity(&replacement));
        if collides {
            return Err(UniqueListError::Duplicate);
        }

        self.items[index] = replacement;
        Ok(index)
    }

    /// Replace the whole contents. Nothing changes if `items` repeats an identity.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), UniqueListError> {
        self.try_set_all(items, |_| UniqueListError::Duplicate)
    }

    /// Like [`Self::set_all`], letting the caller build the error from the first
    /// repeated element.
    pub fn try_set_all<E, F>(&mut self, items: Vec<T>, on_duplicate: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> E,
    {
        if let Some((first, _)) = find_duplicate(&items) {
            return Err(on_duplicate(&items[first]));
        }
        self.items = items;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Identified + Ord> UniqueList<T> {
    /// Index at which `item` would keep the list sorted.
    pub fn sorted_position(&self, item: &T) -> usize {
        self.items.partition_point(|existing| existing < item)
    }

    /// Move the element at `index` back into order, assuming every other element is
    /// already sorted. Returns its new index.
    pub fn resort_at(&mut self, index: usize) -> Option<usize> {
        let item = self.remove_at(index)?;
        let position = self.sorted_position(&item);
        self.items.insert(position, item);
        Some(position)
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// First pair of indices (i < j) whose elements share an identity.
pub fn find_duplicate<T: Identified>(items: &[T]) -> Option<(usize, usize)> {
    for (i, first) in items.iter().enumerate() {
        for (offset, second) in items[i + 1..].iter().enumerate() {
            if first.same_identity(second) {
                return Some((i, i + 1 + offset));
            }
        }
    }
    None
}
