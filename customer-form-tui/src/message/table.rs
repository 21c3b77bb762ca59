//! Customer table messages

/// Customer table messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Load the selected customer into the form
    Edit,
    /// Remove the selected customer, no confirmation
    Delete,
}
