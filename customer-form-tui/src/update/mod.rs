//! Update layer: state changes
//!
//! The only place that mutates the Model. `update` matches every message
//! exhaustively and hands panel-specific messages to the sub-modules:
//!
//! ```text
//!     update/
//!         form.rs     typing, tab order, Submit / Clear
//!         table.rs    row selection, Edit / Delete
//!         modal.rs    closing dialogs
//! ```
//!
//! Customer data changes go through `FormSession::apply`, which returns an
//! `Outcome`; `report` turns that outcome into the status bar message.
//!
//! After `update` returns, control goes back to the main loop (app.rs) and the
//! next frame renders the new state.

mod form;
mod modal;
mod table;

use customer_form_core::Outcome;

use crate::i18n::{self, t};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme;

/// Handle one application message
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // Focus is fixed while a modal is open
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Table(table_msg) => {
            table::update(app, table_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.next();
            app.config_dirty = true;
            theme::set_theme(app.config.theme);

            let texts = t();
            let name = match app.config.theme {
                theme::Theme::Dark => texts.common.theme_dark,
                theme::Theme::Light => texts.common.theme_light,
            };
            app.set_status(format!("{}{name}", texts.status.theme_changed));
        }

        AppMessage::ToggleLanguage => {
            app.config.language = app.config.language.next();
            app.config_dirty = true;
            i18n::set_language(app.config.language);

            app.set_status(format!(
                "{}{}",
                t().status.language_changed,
                app.config.language.display_name()
            ));
        }

        AppMessage::Noop => {}
    }
}

/// Show the result of a session event in the status bar
fn report(app: &mut App, outcome: &Outcome) {
    let texts = &t().status;
    match outcome {
        Outcome::Created(id) => app.set_status(format!("{}{id}", texts.created)),
        Outcome::Updated(id) => app.set_status(format!("{}{id}", texts.updated)),
        Outcome::UpdateSkipped(id) => app.set_status(format!("{}{id}", texts.update_skipped)),
        Outcome::Deleted(id) => app.set_status(format!("{}{id}", texts.deleted)),
        Outcome::EditStarted(id) => app.set_status(format!("{}{id}", texts.editing)),
        Outcome::Cleared => app.set_status(texts.cleared),
        // The form shows validation errors inline
        Outcome::Rejected(_) => app.clear_status(),
        Outcome::FieldChanged(_) | Outcome::Unchanged => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{FormMessage, TableMessage};
    use crate::model::FocusPanel;

    pub(super) fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, AppMessage::Form(FormMessage::Input(ch)));
        }
    }

    pub(super) fn add_customer(app: &mut App, surname: &str, name: &str) {
        app.focus = FocusPanel::Form;
        app.form.focus_first();
        type_text(app, surname);
        update(app, AppMessage::Form(FormMessage::NextField));
        type_text(app, name);
        update(app, AppMessage::Form(FormMessage::Submit));
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::default();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn toggle_focus_is_blocked_by_modal() {
        let mut app = App::default();
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Table);

        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Table);
    }

    #[test]
    fn noop_changes_nothing() {
        let mut app = App::default();
        update(&mut app, AppMessage::Noop);
        assert!(!app.should_quit);
        assert!(app.status_message.is_none());
        assert!(!app.config_dirty);
    }

    #[test]
    fn toggle_theme_marks_config_dirty() {
        let mut app = App::default();
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, theme::Theme::Light);
        assert_eq!(app.take_config_change().map(|c| c.theme), Some(theme::Theme::Light));
        assert_eq!(app.take_config_change(), None);

        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, theme::Theme::Dark);
    }

    #[test]
    fn full_create_edit_delete_flow() {
        let mut app = App::default();
        add_customer(&mut app, "Smith", "John");
        add_customer(&mut app, "Doe", "Jane");
        assert_eq!(app.session.records().len(), 2);

        app.focus = FocusPanel::Table;
        update(&mut app, AppMessage::Table(TableMessage::SelectFirst));
        update(&mut app, AppMessage::Table(TableMessage::Edit));
        assert_eq!(app.focus, FocusPanel::Form);
        assert_eq!(app.session.draft().surname, "Smith");

        type_text(&mut app, "-Jones");
        update(&mut app, AppMessage::Form(FormMessage::Submit));
        assert_eq!(app.session.records().get(0).map(|r| r.data.surname.as_str()), Some("Smith-Jones"));
        assert!(!app.session.is_editing());

        app.focus = FocusPanel::Table;
        update(&mut app, AppMessage::Table(TableMessage::Delete));
        let remaining: Vec<u64> = app.session.records().iter().map(|r| r.id.get()).collect();
        assert_eq!(remaining, vec![2]);
    }
}
