//! Modal dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// Render the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// Area of `width` x `height` centred in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();

    let sections = [
        (texts.help.form_section, texts.help.form_bindings),
        (texts.help.table_section, texts.help.table_bindings),
        (texts.help.global_section, texts.help.global_bindings),
    ];

    let mut lines = Vec::new();
    for (title, bindings) in sections {
        lines.push(Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ));
        for (keys, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<16}"), Styles::hint_key()),
                Span::styled(*action, Style::default().fg(c.fg)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Esc ", Styles::hint_key()),
        Span::styled(texts.hints.close, Style::default().fg(c.muted)),
    ]));

    // Borders take two rows
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 20, area), Rect::new(20, 10, 60, 20));

        let small = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(60, 20, small), Rect::new(0, 0, 30, 10));
    }
}
