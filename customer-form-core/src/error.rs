//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::RecordId;

/// Form layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum FormError {
    /// Surname or name is blank
    #[error("Surname and Name are required!")]
    MissingRequiredFields,

    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),
}

impl FormError {
    /// Caused by user input or a stale reference rather than a bug.
    ///
    /// Expected errors are logged at `warn`, anything else at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingRequiredFields | Self::RecordNotFound(_) => true,
        }
    }
}

/// Form layer Result type alias
pub type FormResult<T> = std::result::Result<T, FormError>;
