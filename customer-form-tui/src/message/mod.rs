//! Message layer: the bridge between Event and Update
//!
//! Every user action is expressed as a message. The Event layer translates raw
//! key presses into an `AppMessage`; the Update layer consumes it and changes
//! the Model.
//!
//! ```text
//!     AppMessage
//!         ├── Form(FormMessage)       typing, tabbing, Submit / Clear
//!         ├── Table(TableMessage)     selection, Edit / Delete
//!         ├── Modal(ModalMessage)     closing dialogs
//!         └── Quit, ToggleFocus, ShowHelp, ToggleTheme, ToggleLanguage, ...
//! ```
//!
//! `AppMessage::Noop` stands in for "no message" so that the handler always
//! returns a value.

mod app;
mod form;
mod modal;
mod table;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use table::TableMessage;
