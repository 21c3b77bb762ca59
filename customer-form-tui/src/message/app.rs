//! Main application message

use super::{FormMessage, ModalMessage, TableMessage};

/// Main application message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Switch between the form and the table
    ToggleFocus,

    /// Form panel messages
    Form(FormMessage),

    /// Customer table messages
    Table(TableMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// Show the help modal
    ShowHelp,

    /// Cycle the colour theme
    ToggleTheme,

    /// Cycle the UI language
    ToggleLanguage,

    /// Nothing to do (ignored events)
    Noop,
}
