//! Customer record models

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Field;
use crate::error::{FormError, FormResult};

/// Identifier of a stored record. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// First identifier handed out by an empty collection
    pub const FIRST: RecordId = RecordId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier after this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The in-progress, unsaved form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub surname: String,
    pub name: String,
    pub address: String,
    pub telephone: String,
}

impl DraftRecord {
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            address: address.into(),
            telephone: telephone.into(),
        }
    }

    /// Read one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Telephone => &self.telephone,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Surname => &mut self.surname,
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Telephone => &mut self.telephone,
        }
    }

    /// Overwrite exactly one field, leaving the others untouched
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Restore all four fields to empty strings
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copy the data fields of a stored record (the identifier is not part of a draft)
    pub fn load_from(&mut self, record: &StoredRecord) {
        self.clone_from(&record.data);
    }

    /// Whether every field is empty
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Surname and name must each contain a non-whitespace character.
    ///
    /// Whitespace is only ignored for this check; stored values are never trimmed.
    pub fn validate(&self) -> FormResult<()> {
        let blank = Field::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .any(|field| self.get(field).trim().is_empty());

        if blank {
            Err(FormError::MissingRequiredFields)
        } else {
            Ok(())
        }
    }
}

/// A finalized, identified customer entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub data: DraftRecord,
}

impl StoredRecord {
    pub fn new(id: RecordId, data: DraftRecord) -> Self {
        Self { id, data }
    }

    pub fn get(&self, field: Field) -> &str {
        self.data.get(field)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> DraftRecord {
        DraftRecord::new("Smith", "John", "1 Main St", "555-0100")
    }

    #[test]
    fn set_field_touches_only_one_field() {
        let mut draft = sample();
        draft.set_field(Field::Address, "2 High St");

        assert_eq!(draft.address, "2 High St");
        assert_eq!(draft.surname, "Smith");
        assert_eq!(draft.name, "John");
        assert_eq!(draft.telephone, "555-0100");
    }

    #[test]
    fn set_field_accepts_any_text() {
        let mut draft = DraftRecord::default();
        let long = "ü".repeat(500);
        draft.set_field(Field::Telephone, long.clone());
        assert_eq!(draft.get(Field::Telephone), long);
    }

    #[test]
    fn reset_empties_everything() {
        let mut draft = sample();
        draft.reset();
        assert!(draft.is_empty());
        assert_eq!(draft, DraftRecord::default());
    }

    #[test]
    fn load_from_copies_data_fields() {
        let record = StoredRecord::new(RecordId::new(4), sample());
        let mut draft = DraftRecord::new("x", "y", "z", "w");
        draft.load_from(&record);
        assert_eq!(draft, sample());
    }

    #[test]
    fn validate_requires_surname_and_name() {
        assert_eq!(sample().validate(), Ok(()));

        let mut draft = sample();
        draft.surname.clear();
        assert_eq!(draft.validate(), Err(FormError::MissingRequiredFields));

        let mut draft = sample();
        draft.name = "   \t".to_string();
        assert_eq!(draft.validate(), Err(FormError::MissingRequiredFields));

        assert_eq!(
            DraftRecord::default().validate(),
            Err(FormError::MissingRequiredFields)
        );
    }

    #[test]
    fn validate_ignores_address_and_telephone() {
        let draft = DraftRecord::new("Smith", "John", "", "");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn validate_does_not_trim_values() {
        let draft = DraftRecord::new("  Smith ", " John", "", "");
        assert_eq!(draft.validate(), Ok(()));
        assert_eq!(draft.surname, "  Smith ");
    }

    #[test]
    fn stored_record_serializes_flat() {
        let record = StoredRecord::new(RecordId::new(2), sample());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["surname"], "Smith");
        assert_eq!(json["telephone"], "555-0100");
    }
}
