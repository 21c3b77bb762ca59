//! Focus state

/// Panel receiving key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Left form panel
    #[default]
    Form,
    /// Right customer table
    Table,
}

impl FocusPanel {
    /// Switch to the other panel
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Form,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    pub fn is_table(self) -> bool {
        matches!(self, FocusPanel::Table)
    }
}
