//! Panel state
//!
//! UI-only state of each panel: what is focused or selected. Customer data
//! itself lives in the `FormSession` held by `App`.

mod form;
mod modal;
mod records;

pub use form::{FormFocus, FormState};
pub use modal::{Modal, ModalState};
pub use records::RecordsState;
