//! Model layer: application state
//!
//! The model is the single source of truth for what is on screen. It holds
//! plain data only; every change goes through the Update layer.
//!
//! ```text
//!     src/model/
//!         app.rs          App: the root state object
//!         focus.rs        FocusPanel: Form / Table
//!         state/
//!             form.rs     FormState: focused input or button
//!             records.rs  RecordsState: selected table row
//!             modal.rs    ModalState: open dialog
//! ```
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! App and FormSession
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App owns one `customer_form_core::FormSession` for the lifetime of the
//!     process. The session carries everything the form is about:
//!         - the draft record (the four inputs)
//!         - the stored customers (the table rows)
//!         - the edit marker (Submit vs. Update)
//!         - the inline error of the last submission
//!
//!     The panel states next to it only say where the cursor is. Nothing in the
//!     model survives the process: quitting drops every customer.
//!
//!     Usage:
//!         - created in main.rs:        let mut app = model::App::new(config);
//!         - changed in update/:        app.session.apply(FormEvent::Submit);
//!         - read in view/:             pub fn render(app: &App, frame: &mut Frame)
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Focus
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     FocusPanel decides which key handler runs:
//!         - Form:  printable keys type into the focused input
//!         - Table: letters are shortcuts (e = edit, d = delete, q = quit)
//!
//!     Flow:
//!         user presses Esc
//!             ↓
//!         event/handler.rs returns AppMessage::ToggleFocus
//!             ↓
//!         update/mod.rs sets app.focus = app.focus.toggle()
//!             ↓
//!         view draws the focused panel with the focused border colour

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{FormFocus, FormState, Modal, ModalState, RecordsState};
