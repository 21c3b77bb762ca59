//! Customer table panel

use customer_form_core::Field;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// Render the customer table
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().table;
    let c = colors();
    let focused = app.focus.is_table();

    let block = Block::default()
        .title(format!(" {} ({}) ", texts.title, app.session.records().len()))
        .title_style(Styles::title())
        .title_bottom(Line::styled(
            format!(" {} ", texts.caption),
            Style::default().fg(c.muted),
        ))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if app.session.records().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(format!("  {}", texts.empty), Style::default().fg(c.muted)),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new([
        texts.id,
        texts.surname,
        texts.name,
        texts.address,
        texts.telephone,
    ])
    .style(Style::default().fg(c.highlight).add_modifier(Modifier::BOLD));

    let editing = app.session.editing_id();
    let rows = app.session.records().iter().map(|record| {
        let is_editing = editing == Some(record.id);
        let id = if is_editing {
            format!("✎{}", record.id)
        } else {
            record.id.to_string()
        };

        let mut cells = vec![Cell::from(id)];
        cells.extend(
            Field::ALL
                .into_iter()
                .map(|field| Cell::from(record.get(field).to_string())),
        );

        let style = if is_editing {
            Style::default().fg(c.warning)
        } else {
            Style::default().fg(c.fg)
        };
        Row::new(cells).style(style)
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Percentage(32),
        Constraint::Percentage(24),
    ];

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.records.selected));
    frame.render_stateful_widget(table, area, &mut state);
}
