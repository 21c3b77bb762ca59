//! Customer table update logic

use customer_form_core::{FormEvent, RecordId};

use super::report;
use crate::i18n::t;
use crate::message::TableMessage;
use crate::model::{App, FocusPanel};

/// Handle customer table messages
pub fn update(app: &mut App, msg: TableMessage) {
    let len = app.session.records().len();

    match msg {
        TableMessage::SelectPrevious => app.records.select_previous(),
        TableMessage::SelectNext => app.records.select_next(len),
        TableMessage::SelectFirst => app.records.select_first(),
        TableMessage::SelectLast => app.records.select_last(len),
        TableMessage::Edit => handle_edit(app),
        TableMessage::Delete => handle_delete(app),
    }
}

fn selected_id(app: &App) -> Option<RecordId> {
    app.session
        .records()
        .get(app.records.selected)
        .map(|record| record.id)
}

fn handle_edit(app: &mut App) {
    let Some(id) = selected_id(app) else {
        app.set_status(t().status.no_selection);
        return;
    };

    let outcome = app.session.apply(FormEvent::Edit(id));
    app.focus = FocusPanel::Form;
    app.form.focus_first();
    report(app, &outcome);
}

fn handle_delete(app: &mut App) {
    let Some(id) = selected_id(app) else {
        app.set_status(t().status.no_selection);
        return;
    };

    let outcome = app.session.apply(FormEvent::Delete(id));
    app.records.clamp(app.session.records().len());
    report(app, &outcome);
}

#[cfg(test)]
mod tests {
    use customer_form_core::EditMarker;

    use super::*;
    use crate::update::tests::add_customer;

    fn app_with(names: &[(&str, &str)]) -> App {
        let mut app = App::default();
        for (surname, name) in names {
            add_customer(&mut app, surname, name);
        }
        app.focus = FocusPanel::Table;
        app
    }

    #[test]
    fn edit_loads_selected_row_into_form() {
        let mut app = app_with(&[("Smith", "John"), ("Doe", "Jane")]);
        update(&mut app, TableMessage::SelectFirst);
        update(&mut app, TableMessage::SelectNext);
        update(&mut app, TableMessage::Edit);

        assert_eq!(app.session.marker(), EditMarker::Editing(RecordId::new(2)));
        assert_eq!(app.session.draft().surname, "Doe");
        assert_eq!(app.focus, FocusPanel::Form);
    }

    #[test]
    fn delete_last_row_moves_selection_up() {
        let mut app = app_with(&[("A", "B"), ("C", "D"), ("E", "F")]);
        update(&mut app, TableMessage::SelectLast);
        assert_eq!(app.records.selected, 2);

        update(&mut app, TableMessage::Delete);
        assert_eq!(app.session.records().len(), 2);
        assert_eq!(app.records.selected, 1);
        assert_eq!(app.focus, FocusPanel::Table);
    }

    #[test]
    fn delete_while_editing_keeps_marker() {
        let mut app = app_with(&[("A", "B")]);
        update(&mut app, TableMessage::Edit);
        update(&mut app, TableMessage::Delete);

        assert!(app.session.records().is_empty());
        assert_eq!(app.session.marker(), EditMarker::Editing(RecordId::new(1)));
    }

    #[test]
    fn actions_on_empty_table_only_set_status() {
        let mut app = App::default();
        update(&mut app, TableMessage::Edit);
        update(&mut app, TableMessage::Delete);

        assert!(app.status_message.is_some());
        assert_eq!(app.session.marker(), EditMarker::Idle);
        assert_eq!(app.focus, FocusPanel::Form);
    }
}
