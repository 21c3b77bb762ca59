//! English (en-US)

use super::keys::{
    CommonTexts, FormTexts, HelpTexts, HintTexts, StatusTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Customer Form",
        theme_dark: "Dark",
        theme_light: "Light",
    },

    form: FormTexts {
        title: "Customer information",
        surname: "Surname",
        name: "Name",
        address: "Address",
        telephone: "Telephone",
        surname_placeholder: "Surname...",
        name_placeholder: "Name...",
        address_placeholder: "Address...",
        telephone_placeholder: "Telephone...",
        clear: "Clear",
        submit: "Submit",
        update: "Update",
        required_error: "Surname and Name are required!",
        not_found_error: "Record not found: ",
        editing: "Editing #",
    },

    table: TableTexts {
        title: "Customers",
        caption: "A list of customers.",
        empty: "No customers yet.",
        id: "ID",
        surname: "Surname",
        name: "Name",
        address: "Address",
        telephone: "Telephone",
    },

    status: StatusTexts {
        created: "Created customer #",
        updated: "Updated customer #",
        update_skipped: "Nothing to update, customer was deleted: #",
        deleted: "Deleted customer #",
        editing: "Editing customer #",
        cleared: "Form cleared",
        no_selection: "No customer selected",
        theme_changed: "Theme: ",
        language_changed: "Language: ",
        config_save_failed: "Could not save settings: ",
    },

    hints: HintTexts {
        next_field: "Next field",
        submit: "Submit",
        clear: "Clear",
        switch_panel: "Switch panel",
        select: "Select",
        edit: "Edit",
        delete: "Delete",
        help: "Help",
        quit: "Quit",
        close: "Close",
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        form_section: "Form",
        table_section: "Customer list",
        global_section: "Global",
        form_bindings: &[
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous field"),
            ("Enter", "Submit, or press the focused button"),
            ("Alt+s", "Submit"),
            ("Alt+c", "Clear the form"),
            ("Backspace", "Delete last character"),
        ],
        table_bindings: &[
            ("↑↓ / j k", "Select customer"),
            ("Home / End", "First / last customer"),
            ("Enter / e", "Edit customer"),
            ("Del / d", "Delete customer"),
            ("Tab", "Back to the form"),
        ],
        global_bindings: &[
            ("Esc", "Switch panel"),
            ("F1", "Help"),
            ("F2", "Toggle theme"),
            ("F3", "Toggle language"),
            ("Alt+q / Ctrl+C", "Quit"),
        ],
    },
};
