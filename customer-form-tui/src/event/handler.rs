//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage, TableMessage};
use crate::model::{App, FocusPanel};

/// Poll for one event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map an event to a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next loop iteration
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    match app.focus {
        FocusPanel::Form => handle_form_keys(key),
        FocusPanel::Table => handle_table_keys(key),
    }
}

/// Keys while a modal is open
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1)) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

/// Keys in the form panel
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Form(FormMessage::Clear);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Enter => AppMessage::Form(FormMessage::Confirm),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// Keys in the customer table
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::EDIT.matches(&key) {
        return AppMessage::Table(TableMessage::Edit);
    }
    if DefaultKeymap::DELETE.matches(&key) {
        return AppMessage::Table(TableMessage::Delete);
    }

    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Table(TableMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Table(TableMessage::SelectNext),
        KeyCode::Home => AppMessage::Table(TableMessage::SelectFirst),
        KeyCode::End => AppMessage::Table(TableMessage::SelectLast),
        KeyCode::Enter | KeyCode::Char('e') => AppMessage::Table(TableMessage::Edit),
        KeyCode::Delete | KeyCode::Char('d') => AppMessage::Table(TableMessage::Delete),
        KeyCode::Tab => AppMessage::ToggleFocus,
        KeyCode::Char('?') => AppMessage::ShowHelp,
        KeyCode::Char('q') => AppMessage::Quit,
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    fn table_app() -> App {
        let mut app = App::default();
        app.focus = FocusPanel::Table;
        app
    }

    #[test]
    fn form_captures_letters() {
        let app = App::default();
        assert_eq!(
            handle_event(key(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('S'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::Input('S'))
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::Form(FormMessage::Input('?'))
        );
    }

    #[test]
    fn form_navigation_and_actions() {
        let app = App::default();
        assert_eq!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::Form(FormMessage::NextField)
        );
        assert_eq!(
            handle_event(press(KeyCode::BackTab, KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::PrevField)
        );
        assert_eq!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Confirm)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('s'), KeyModifiers::ALT), &app),
            AppMessage::Form(FormMessage::Submit)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::ALT), &app),
            AppMessage::Form(FormMessage::Clear)
        );
    }

    #[test]
    fn table_letters_are_shortcuts() {
        let app = table_app();
        assert_eq!(
            handle_event(key(KeyCode::Char('e')), &app),
            AppMessage::Table(TableMessage::Edit)
        );
        assert_eq!(
            handle_event(key(KeyCode::Delete), &app),
            AppMessage::Table(TableMessage::Delete)
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('j')), &app),
            AppMessage::Table(TableMessage::SelectNext)
        );
        assert_eq!(handle_event(key(KeyCode::Char('q')), &app), AppMessage::Quit);
        assert_eq!(handle_event(key(KeyCode::Tab), &app), AppMessage::ToggleFocus);
    }

    #[test]
    fn global_bindings() {
        let app = App::default();
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::ALT), &app),
            AppMessage::Quit
        );
        assert_eq!(handle_event(key(KeyCode::F(1)), &app), AppMessage::ShowHelp);
        assert_eq!(handle_event(key(KeyCode::F(2)), &app), AppMessage::ToggleTheme);
        assert_eq!(handle_event(key(KeyCode::F(3)), &app), AppMessage::ToggleLanguage);
        assert_eq!(handle_event(key(KeyCode::Esc), &app), AppMessage::ToggleFocus);
    }

    #[test]
    fn modal_swallows_keys() {
        let mut app = App::default();
        app.modal.show_help();
        assert_eq!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        assert_eq!(handle_event(key(KeyCode::Char('x')), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_event(Event::Key(release), &app), AppMessage::Noop);
    }
}
