//! Translation key definitions
//!
//! ## Grouping
//!
//! 1. Text belongs to the UI component it appears in (`form.*`, `table.*`)
//! 2. Modal content lives under `help.*`
//! 3. Status bar messages live under `status.*`, key hints under `hints.*`
//! 4. Words reused across components live under `common.*`

use customer_form_core::Field;

/// Root of all translated text
pub struct Translations {
    pub common: CommonTexts,
    pub form: FormTexts,
    pub table: TableTexts,
    pub status: StatusTexts,
    pub hints: HintTexts,
    pub help: HelpTexts,
}

// ============================================================================
// Common
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

// ============================================================================
// Form panel
// ============================================================================

pub struct FormTexts {
    pub title: &'static str,
    pub surname: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub telephone: &'static str,
    pub surname_placeholder: &'static str,
    pub name_placeholder: &'static str,
    pub address_placeholder: &'static str,
    pub telephone_placeholder: &'static str,
    pub clear: &'static str,
    pub submit: &'static str,
    pub update: &'static str,
    /// Inline error for a blank surname or name
    pub required_error: &'static str,
    /// Prefix of the "record not found" error, followed by the id
    pub not_found_error: &'static str,
    /// Prefix shown in the title while editing, followed by the id
    pub editing: &'static str,
}

impl FormTexts {
    /// Input label
    pub fn label(&self, field: Field) -> &'static str {
        match field {
            Field::Surname => self.surname,
            Field::Name => self.name,
            Field::Address => self.address,
            Field::Telephone => self.telephone,
        }
    }

    /// Placeholder shown while the input is empty and unfocused
    pub fn placeholder(&self, field: Field) -> &'static str {
        match field {
            Field::Surname => self.surname_placeholder,
            Field::Name => self.name_placeholder,
            Field::Address => self.address_placeholder,
            Field::Telephone => self.telephone_placeholder,
        }
    }
}

// ============================================================================
// Table panel
// ============================================================================

pub struct TableTexts {
    pub title: &'static str,
    pub caption: &'static str,
    pub empty: &'static str,
    pub id: &'static str,
    pub surname: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub telephone: &'static str,
}

// ============================================================================
// Status bar messages (prefixes are followed by a record id)
// ============================================================================

pub struct StatusTexts {
    pub created: &'static str,
    pub updated: &'static str,
    pub update_skipped: &'static str,
    pub deleted: &'static str,
    pub editing: &'static str,
    pub cleared: &'static str,
    pub no_selection: &'static str,
    pub theme_changed: &'static str,
    pub language_changed: &'static str,
    pub config_save_failed: &'static str,
}

// ============================================================================
// Key hints
// ============================================================================

pub struct HintTexts {
    pub next_field: &'static str,
    pub submit: &'static str,
    pub clear: &'static str,
    pub switch_panel: &'static str,
    pub select: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
}

// ============================================================================
// Help modal
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub form_section: &'static str,
    pub table_section: &'static str,
    pub global_section: &'static str,
    /// (keys, action) pairs
    pub form_bindings: &'static [(&'static str, &'static str)],
    pub table_bindings: &'static [(&'static str, &'static str)],
    pub global_bindings: &'static [(&'static str, &'static str)],
}
