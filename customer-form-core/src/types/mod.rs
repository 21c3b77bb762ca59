//! Record types

mod field;
mod record;

pub use field::{Field, ParseFieldError};
pub use record::{DraftRecord, RecordId, StoredRecord};
