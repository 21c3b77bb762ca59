//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// Render the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let separator = Style::default().fg(c.muted);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", separator));
        spans.push(Span::styled(
            msg.clone(),
            Style::default().fg(c.selected_fg).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current focus
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = &t().hints;

    if app.modal.is_open() {
        return vec![("Esc", texts.close)];
    }

    let mut hints = Vec::new();
    match app.focus {
        FocusPanel::Form => {
            hints.push(("Tab", texts.next_field));
            hints.push(("Alt+s", texts.submit));
            hints.push(("Alt+c", texts.clear));
        }
        FocusPanel::Table => {
            hints.push(("↑↓", texts.select));
            hints.push(("e", texts.edit));
            hints.push(("d", texts.delete));
        }
    }
    hints.push(("Esc", texts.switch_panel));
    hints.push(("F1", texts.help));
    hints.push(("Alt+q", texts.quit));

    hints
}
