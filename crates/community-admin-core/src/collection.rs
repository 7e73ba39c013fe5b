//! Indexed Collection
//!
//! Ordered, id-keyed record storage with copy-on-write updates. Every
//! mutation returns a new collection and leaves the receiver untouched.

use indexmap::IndexMap;
use tracing::debug;

use crate::entity::Entity;
use crate::error::{CoreError, Result};

/// Records in insertion order, addressable by id
#[derive(Debug, Clone)]
pub struct IndexedCollection<T: Entity> {
    records: IndexMap<T::Id, T>,
}

impl<T: Entity> Default for IndexedCollection<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T: Entity> IndexedCollection<T> {
    /// Build from records in order, rejecting duplicate ids
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut map = IndexMap::new();
        for record in records {
            let id = record.id();
            if map.contains_key(&id) {
                return Err(CoreError::DuplicateRecordId { id: id.to_string() });
            }
            map.insert(id, record);
        }
        Ok(Self { records: map })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.records.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Apply `patch` to one record, returning the updated collection
    ///
    /// The patch must not change the record's id.
    pub fn update(&self, id: &T::Id, patch: impl FnOnce(&mut T)) -> Result<Self> {
        let mut next = self.clone();
        let record = next
            .records
            .get_mut(id)
            .ok_or_else(|| CoreError::RecordNotFound { id: id.to_string() })?;
        patch(record);
        if record.id() != *id {
            return Err(CoreError::IdChanged {
                from: id.to_string(),
                to: record.id().to_string(),
            });
        }
        debug!(%id, "record updated");
        Ok(next)
    }

    /// Append a record, rejecting an id that is already present
    pub fn insert(&self, record: T) -> Result<Self> {
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(CoreError::DuplicateRecordId { id: id.to_string() });
        }
        let mut next = self.clone();
        next.records.insert(id, record);
        Ok(next)
    }

    /// Remove a record, keeping the order of the rest
    pub fn remove(&self, id: &T::Id) -> Result<Self> {
        let mut next = self.clone();
        next.records
            .shift_remove(id)
            .ok_or_else(|| CoreError::RecordNotFound { id: id.to_string() })?;
        debug!(%id, "record removed");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    impl Entity for Note {
        type Id = u32;

        fn id(&self) -> Self::Id {
            self.id
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    fn sample() -> IndexedCollection<Note> {
        IndexedCollection::from_records(vec![note(1, "a"), note(2, "b"), note(3, "c")]).unwrap()
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let err = IndexedCollection::from_records(vec![note(1, "a"), note(1, "b")]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateRecordId { .. }));
    }

    #[test]
    fn test_update_returns_new_collection() {
        let original = sample();
        let updated = original.update(&2, |n| n.text = "changed".into()).unwrap();

        assert_eq!(original.get(&2).unwrap().text, "b");
        assert_eq!(updated.get(&2).unwrap().text, "changed");
        let ids: Vec<u32> = updated.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_missing_id() {
        assert!(matches!(
            sample().update(&9, |_| {}),
            Err(CoreError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_update_cannot_change_id() {
        assert!(matches!(
            sample().update(&1, |n| n.id = 7),
            Err(CoreError::IdChanged { .. })
        ));
    }

    #[test]
    fn test_insert_and_remove() {
        let original = sample();
        let grown = original.insert(note(4, "d")).unwrap();
        assert_eq!(grown.len(), 4);
        assert!(original.insert(note(1, "dup")).is_err());

        let shrunk = grown.remove(&2).unwrap();
        let ids: Vec<u32> = shrunk.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(grown.len(), 4);
    }
}
