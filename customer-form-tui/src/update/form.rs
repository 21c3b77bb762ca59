//! Form panel update logic

use customer_form_core::{FormEvent, Outcome};

use super::report;
use crate::message::FormMessage;
use crate::model::{App, FormFocus};

/// Handle form panel messages
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::NextField => app.form.focus_next(),
        FormMessage::PrevField => app.form.focus_previous(),
        FormMessage::Input(ch) => edit_focused(app, |value| value.push(ch)),
        FormMessage::Backspace => edit_focused(app, |value| {
            value.pop();
        }),
        FormMessage::Confirm => match app.form.focus {
            FormFocus::ClearButton => clear(app),
            FormFocus::Input(_) | FormFocus::SubmitButton => submit(app),
        },
        FormMessage::Submit => submit(app),
        FormMessage::Clear => clear(app),
    }
}

/// Rewrite the focused input and hand the whole new value to the session
fn edit_focused(app: &mut App, edit: impl FnOnce(&mut String)) {
    let Some(field) = app.form.focused_field() else {
        return;
    };

    let mut value = app.session.draft().get(field).to_string();
    edit(&mut value);
    app.session.apply(FormEvent::SetField(field, value));
}

fn submit(app: &mut App) {
    let outcome = app.session.apply(FormEvent::Submit);

    match outcome {
        Outcome::Created(id) => {
            app.form.focus_first();
            if let Some(index) = app.session.records().position(id) {
                app.records.selected = index;
            }
        }
        Outcome::Updated(_) | Outcome::UpdateSkipped(_) => {
            app.form.focus_first();
            app.records.clamp(app.session.records().len());
        }
        _ => {}
    }

    report(app, &outcome);
}

fn clear(app: &mut App) {
    let outcome = app.session.apply(FormEvent::Clear);
    app.form.focus_first();
    report(app, &outcome);
}

#[cfg(test)]
mod tests {
    use customer_form_core::{DraftRecord, Field, FormError, RecordId};

    use super::*;
    use crate::update::tests::{add_customer, type_text};

    fn send(app: &mut App, msg: FormMessage) {
        update(app, msg);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut app = App::default();
        type_text(&mut app, "Smith");
        send(&mut app, FormMessage::NextField);
        type_text(&mut app, "John");
        send(&mut app, FormMessage::NextField);
        type_text(&mut app, "1 Main St");
        send(&mut app, FormMessage::NextField);
        type_text(&mut app, "555-0100");

        assert_eq!(
            app.session.draft(),
            &DraftRecord::new("Smith", "John", "1 Main St", "555-0100")
        );
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut app = App::default();
        type_text(&mut app, "Smithh");
        send(&mut app, FormMessage::Backspace);
        assert_eq!(app.session.draft().get(Field::Surname), "Smith");

        send(&mut app, FormMessage::NextField);
        send(&mut app, FormMessage::Backspace);
        assert_eq!(app.session.draft().get(Field::Name), "");
    }

    #[test]
    fn typing_on_a_button_does_nothing() {
        let mut app = App::default();
        app.form.focus = FormFocus::SubmitButton;
        type_text(&mut app, "x");
        assert!(app.session.draft().is_empty());
    }

    #[test]
    fn submit_creates_row_and_selects_it() {
        let mut app = App::default();
        add_customer(&mut app, "Smith", "John");
        add_customer(&mut app, "Doe", "Jane");

        assert_eq!(app.session.records().len(), 2);
        assert_eq!(app.records.selected, 1);
        assert!(app.session.draft().is_empty());
        assert_eq!(app.form.focus, FormFocus::Input(Field::Surname));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn blank_submit_shows_inline_error() {
        let mut app = App::default();
        send(&mut app, FormMessage::NextField);
        type_text(&mut app, "X");
        send(&mut app, FormMessage::Confirm);

        assert!(app.session.records().is_empty());
        assert_eq!(app.session.error(), Some(&FormError::MissingRequiredFields));
        assert_eq!(app.session.draft().get(Field::Name), "X");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn enter_on_clear_button_clears() {
        let mut app = App::default();
        type_text(&mut app, "Smith");
        app.form.focus = FormFocus::ClearButton;
        send(&mut app, FormMessage::Confirm);

        assert!(app.session.draft().is_empty());
        assert!(app.session.records().is_empty());
        assert_eq!(app.form.focus, FormFocus::Input(Field::Surname));
    }

    #[test]
    fn clear_while_editing_keeps_update_mode() {
        let mut app = App::default();
        add_customer(&mut app, "Smith", "John");
        app.session.apply(FormEvent::Edit(RecordId::new(1)));

        send(&mut app, FormMessage::Clear);
        assert!(app.session.draft().is_empty());
        assert_eq!(app.session.editing_id(), Some(RecordId::new(1)));
    }
}
