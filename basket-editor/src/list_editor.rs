//! Index-addressable list editing
//!
//! Backs every variable-length part of the form: image URLs, included
//! items, customization groups and the options inside each group.

use serde::Serialize;

use crate::error::{EditorError, EditorResult};

/// Ordered list edited by position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListEditor<T> {
    entries: Vec<T>,
}

impl<T> Default for ListEditor<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> ListEditor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Mutable handle to one entry, for nested editors
    pub fn get_mut(&mut self, index: usize) -> EditorResult<&mut T> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Add an entry at the end
    pub fn append(&mut self, value: T) {
        self.entries.push(value);
        tracing::trace!(len = self.entries.len(), "List entry appended");
    }

    /// Replace the entry at `index`, leaving every other entry untouched
    pub fn update_at(&mut self, index: usize, value: T) -> EditorResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Remove the entry at `index`; later entries shift down by one
    pub fn remove_at(&mut self, index: usize) -> EditorResult<T> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        tracing::trace!(index, len = self.entries.len(), "List entry removed");
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> EditorResult<()> {
        if index >= self.entries.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }
}

impl<T> From<Vec<T>> for ListEditor<T> {
    fn from(entries: Vec<T>) -> Self {
        Self { entries }
    }
}

impl<T> FromIterator<T> for ListEditor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ListEditor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Non-empty list plus an index inside it
    fn arb_list_and_index() -> impl Strategy<Value = (Vec<String>, usize)> {
        prop::collection::vec("[ a-z]{0,4}", 1..12)
            .prop_flat_map(|entries| {
                let len = entries.len();
                (Just(entries), 0..len)
            })
    }

    proptest! {
        #[test]
        fn remove_at_deletes_exactly_one_entry((entries, index) in arb_list_and_index()) {
            let mut list = ListEditor::from(entries.clone());
            let removed = list.remove_at(index).unwrap();

            let mut expected = entries.clone();
            let expected_removed = expected.remove(index);
            prop_assert_eq!(removed, expected_removed);
            prop_assert_eq!(list.len(), entries.len() - 1);
            prop_assert_eq!(list.as_slice(), expected.as_slice());
        }

        #[test]
        fn out_of_range_leaves_list_untouched(
            entries in prop::collection::vec("[a-z]{0,3}", 0..6),
            extra in 0usize..4
        ) {
            let mut list = ListEditor::from(entries.clone());
            let index = entries.len() + extra;
            prop_assert!(list.remove_at(index).is_err());
            prop_assert!(list.update_at(index, String::new()).is_err());
            prop_assert_eq!(list.into_vec(), entries);
        }
    }
}
