//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::i18n::{current_language, t};
use crate::model::App;

use super::components;
use super::theme::{colors, Styles, Theme};

/// Render the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let c = colors();

    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), size);

    // Title bar + content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[1]);

    components::form::render(app, frame, columns[0]);
    components::table::render(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Modal on top
    components::modal::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let theme_name = match app.config.theme {
        Theme::Dark => texts.common.theme_dark,
        Theme::Light => texts.common.theme_light,
    };

    let title = Paragraph::new(format!(
        " {}  ·  {}  ·  {}",
        texts.common.app_name,
        theme_name,
        current_language().code()
    ))
    .style(Styles::statusbar());
    frame.render_widget(title, area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use customer_form_core::{DraftRecord, Field, FormEvent};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::FocusPanel;

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn add(app: &mut App, surname: &str, name: &str) {
        app.session
            .apply(FormEvent::SetField(Field::Surname, surname.to_string()));
        app.session
            .apply(FormEvent::SetField(Field::Name, name.to_string()));
        app.session.apply(FormEvent::Submit);
    }

    #[test]
    fn empty_app_shows_form_and_empty_table() {
        let app = App::default();
        let screen = render_to_string(&app, 110, 30);

        assert!(screen.contains("Customer information"));
        assert!(screen.contains("Surname"));
        assert!(screen.contains("Telephone"));
        assert!(screen.contains("[ Submit ]"));
        assert!(screen.contains("No customers yet."));
    }

    #[test]
    fn stored_customers_are_listed() {
        let mut app = App::default();
        add(&mut app, "Smith", "John");
        add(&mut app, "Doe", "Jane");
        app.focus = FocusPanel::Table;

        let screen = render_to_string(&app, 110, 30);
        assert!(screen.contains("Smith"));
        assert!(screen.contains("Jane"));
        assert!(screen.contains("A list of customers."));
        assert!(!screen.contains("No customers yet."));
    }

    #[test]
    fn failed_submit_shows_inline_error() {
        let mut app = App::default();
        app.session.apply(FormEvent::Submit);

        let screen = render_to_string(&app, 110, 30);
        assert!(screen.contains("Surname and Name are required!"));
    }

    #[test]
    fn editing_switches_button_label() {
        let mut app = App::default();
        add(&mut app, "Smith", "John");
        let id = app.session.records().records()[0].id;
        app.session.apply(FormEvent::Edit(id));

        let screen = render_to_string(&app, 110, 30);
        assert!(screen.contains("[ Update ]"));
        assert!(screen.contains("Editing #1"));
        assert_eq!(app.session.draft(), &DraftRecord::new("Smith", "John", "", ""));
    }

    #[test]
    fn help_modal_is_drawn_on_top() {
        let mut app = App::default();
        app.modal.show_help();

        let screen = render_to_string(&app, 110, 40);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("Toggle theme"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = App::default();
        add(&mut app, "Smith", "John");
        app.modal.show_help();
        render_to_string(&app, 10, 4);
    }
}
