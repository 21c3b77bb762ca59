//! Form panel messages

/// Form panel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// Next input or button
    NextField,
    /// Previous input or button
    PrevField,
    /// Type a character into the focused input
    Input(char),
    /// Remove the last character of the focused input
    Backspace,
    /// Enter: press the focused button, otherwise submit
    Confirm,
    /// Submit / Update, regardless of focus
    Submit,
    /// Clear the draft, regardless of focus
    Clear,
}
