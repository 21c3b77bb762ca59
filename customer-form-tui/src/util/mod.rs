//! Util layer: infrastructure
//!
//! Code with no customer logic in it:
//!
//! ```text
//!     util/
//!         terminal.rs     raw mode + alternate screen, and undoing both
//!         logging.rs      tracing subscriber writing to a log file
//! ```
//!
//! `restore_terminal` must run whether the main loop returned an error or
//! not, otherwise the shell is left in raw mode. `main` calls it right after
//! `app::run` and only then propagates the result.
//!
//! Logs go to a file because stdout belongs to the terminal UI.

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
