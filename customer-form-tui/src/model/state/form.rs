//! Form panel state

use customer_form_core::Field;

/// Focusable element of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Input(Field),
    ClearButton,
    SubmitButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Input(Field::Surname)
    }
}

impl FormFocus {
    /// Tab order
    const ORDER: [FormFocus; 6] = [
        FormFocus::Input(Field::Surname),
        FormFocus::Input(Field::Name),
        FormFocus::Input(Field::Address),
        FormFocus::Input(Field::Telephone),
        FormFocus::ClearButton,
        FormFocus::SubmitButton,
    ];

    fn position(self) -> usize {
        match self {
            FormFocus::Input(field) => field.index(),
            FormFocus::ClearButton => 4,
            FormFocus::SubmitButton => 5,
        }
    }
}

/// Form panel state
#[derive(Debug, Default)]
pub struct FormState {
    pub focus: FormFocus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next element, wrapping around
    pub fn focus_next(&mut self) {
        let next = (self.focus.position() + 1) % FormFocus::ORDER.len();
        self.focus = FormFocus::ORDER[next];
    }

    /// Move to the previous element, wrapping around
    pub fn focus_previous(&mut self) {
        let len = FormFocus::ORDER.len();
        let prev = (self.focus.position() + len - 1) % len;
        self.focus = FormFocus::ORDER[prev];
    }

    /// Back to the first input
    pub fn focus_first(&mut self) {
        self.focus = FormFocus::default();
    }

    /// Field receiving typed characters, if an input is focused
    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            FormFocus::Input(field) => Some(field),
            FormFocus::ClearButton | FormFocus::SubmitButton => None,
        }
    }
}
