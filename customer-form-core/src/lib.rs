//! Customer Form Core Library
//!
//! Provides the platform-independent logic behind the customer form:
//! - Draft and stored customer records (`types`)
//! - The ordered record collection with identifier allocation (`store`)
//! - The interaction state machine driven by form events (`session`)
//!
//! Nothing in this crate touches a terminal, a file, or the network. Front ends
//! own a [`FormSession`] and feed it [`FormEvent`]s.

pub mod error;
pub mod session;
pub mod store;
pub mod types;

// Re-export common types
pub use error::{FormError, FormResult};
pub use session::{EditMarker, FormEvent, FormSession, Outcome};
pub use store::RecordCollection;
pub use types::{DraftRecord, Field, ParseFieldError, RecordId, StoredRecord};
