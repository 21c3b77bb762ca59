//! Event layer: input handling
//!
//! Turns terminal events into messages.
//!
//! ```text
//!     poll_event(timeout)     waits up to `timeout` for one crossterm event
//!     handle_event(event)     maps it to an AppMessage
//! ```
//!
//! Key presses are routed in this order:
//!     1. an open modal takes every key (Esc / Enter close it)
//!     2. global bindings: quit, help, theme, language, switch panel
//!     3. the focused panel: the form captures printable characters, the
//!        table treats letters as shortcuts
//!
//! Only `KeyEventKind::Press` is handled, so terminals that also report
//! release and repeat events do not double every keystroke.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
