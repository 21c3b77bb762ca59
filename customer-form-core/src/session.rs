//! Interaction state machine
//!
//! A [`FormSession`] is the whole state of one customer form view: the draft
//! being typed, the stored records, which record (if any) is being edited, and
//! the inline error left by the last submission. Front ends own exactly one
//! session and change it only through [`FormSession::apply`].
//!
//! ```text
//!   Idle ──Edit(id)──▶ Editing(id)
//!    ▲  ╲                  │
//!    │   Submit(valid)     │ Submit(valid): update(id), reset draft
//!    │   create, reset     │
//!    └─────────────────────┘
//! ```
//!
//! Validation failures, `Clear` and `Delete` never change the marker.

use crate::error::FormError;
use crate::store::RecordCollection;
use crate::types::{DraftRecord, Field, RecordId};

/// Which stored record, if any, the draft is an edit of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMarker {
    #[default]
    Idle,
    Editing(RecordId),
}

impl EditMarker {
    pub fn editing_id(self) -> Option<RecordId> {
        match self {
            EditMarker::Idle => None,
            EditMarker::Editing(id) => Some(id),
        }
    }
}

/// User-triggered form events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A keystroke changed one input
    SetField(Field, String),
    /// Submit / Update button
    Submit,
    /// Clear button
    Clear,
    /// Row edit action
    Edit(RecordId),
    /// Row delete action
    Delete(RecordId),
}

/// What an event did, for status reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    FieldChanged(Field),
    Created(RecordId),
    Updated(RecordId),
    /// Submitted while editing a record that no longer exists
    UpdateSkipped(RecordId),
    Rejected(FormError),
    Cleared,
    EditStarted(RecordId),
    Deleted(RecordId),
    Unchanged,
}

/// Complete state of one form view
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    draft: DraftRecord,
    records: RecordCollection,
    marker: EditMarker,
    error: Option<FormError>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    pub fn marker(&self) -> EditMarker {
        self.marker
    }

    /// Error from the last submission attempt, if it failed
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.marker, EditMarker::Editing(_))
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        self.marker.editing_id()
    }

    /// Label of the submit control
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Submit"
        }
    }

    /// Apply one event
    pub fn apply(&mut self, event: FormEvent) -> Outcome {
        match event {
            FormEvent::SetField(field, value) => {
                self.draft.set_field(field, value);
                Outcome::FieldChanged(field)
            }
            FormEvent::Submit => self.submit(),
            FormEvent::Clear => {
                self.draft.reset();
                Outcome::Cleared
            }
            FormEvent::Edit(id) => self.start_edit(id),
            FormEvent::Delete(id) => match self.records.delete(id) {
                Some(_) => Outcome::Deleted(id),
                None => Outcome::Unchanged,
            },
        }
    }

    fn submit(&mut self) -> Outcome {
        if let Err(e) = self.draft.validate() {
            log::debug!("Submission rejected: {e}");
            self.error = Some(e.clone());
            return Outcome::Rejected(e);
        }
        self.error = None;

        log::debug!("Submitting draft: {:?}", self.draft);

        let outcome = match self.marker {
            EditMarker::Editing(id) => {
                self.marker = EditMarker::Idle;
                match self.records.update(id, &self.draft) {
                    Ok(()) => Outcome::Updated(id),
                    Err(e) if e.is_expected() => {
                        log::warn!("Update skipped, edited record is gone: {e}");
                        Outcome::UpdateSkipped(id)
                    }
                    Err(e) => {
                        log::error!("Update failed: {e}");
                        Outcome::UpdateSkipped(id)
                    }
                }
            }
            EditMarker::Idle => match self.records.create(&self.draft) {
                Ok(id) => Outcome::Created(id),
                Err(e) => {
                    self.error = Some(e.clone());
                    return Outcome::Rejected(e);
                }
            },
        };

        self.draft.reset();
        outcome
    }

    fn start_edit(&mut self, id: RecordId) -> Outcome {
        let Some(record) = self.records.find_by_id(id) else {
            return Outcome::Unchanged;
        };
        self.draft.load_from(record);
        self.marker = EditMarker::Editing(id);
        log::debug!("Editing record {id}");
        Outcome::EditStarted(id)
    }
}
