//! Ordered in-memory record collection
//!
//! Insertion order is display order. Identifiers come from a high-water counter:
//! the next identifier is always one more than the largest identifier this
//! collection has ever handed out, so deleting a record (even the newest one)
//! never makes its identifier available again.

use crate::error::{FormError, FormResult};
use crate::types::{DraftRecord, RecordId, StoredRecord};

/// Ordered collection of stored records
#[derive(Debug, Clone)]
pub struct RecordCollection {
    records: Vec<StoredRecord>,
    next_id: RecordId,
}

impl Default for RecordCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordCollection {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: RecordId::FIRST,
        }
    }

    /// Validate the draft and append it under a freshly allocated identifier.
    pub fn create(&mut self, draft: &DraftRecord) -> FormResult<RecordId> {
        draft.validate()?;

        let id = self.next_id;
        self.next_id = id.next();
        self.records.push(StoredRecord::new(id, draft.clone()));

        log::debug!("Created record {id}");
        Ok(id)
    }

    /// Replace the data fields of an existing record, keeping its identifier and position.
    pub fn update(&mut self, id: RecordId, draft: &DraftRecord) -> FormResult<()> {
        draft.validate()?;

        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(FormError::RecordNotFound(id))?;
        record.data.clone_from(draft);

        log::debug!("Updated record {id}");
        Ok(())
    }

    /// Remove the record with this identifier. Absent identifiers are a no-op.
    pub fn delete(&mut self, id: RecordId) -> Option<StoredRecord> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);

        log::debug!("Deleted record {id}");
        Some(removed)
    }

    pub fn find_by_id(&self, id: RecordId) -> Option<&StoredRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Display position of a record
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Identifier the next successful `create` will assign
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoredRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&StoredRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a StoredRecord;
    type IntoIter = std::slice::Iter<'a, StoredRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
