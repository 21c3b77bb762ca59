//! Customer form panel

use customer_form_core::{Field, FormError};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::{App, FormFocus};
use crate::view::theme::{colors, Styles};

const CURSOR: &str = "▎";
const INDENT: &str = "  ";

/// Render the form panel
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().form;
    let c = colors();
    let focused = app.focus.is_form();

    let mut title = vec![Span::styled(format!(" {} ", texts.title), Styles::title())];
    if let Some(id) = app.session.editing_id() {
        title.push(Span::styled(
            format!("{}{id} ", texts.editing),
            Style::default().fg(c.warning),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_width = usize::from(inner.width)
        .saturating_sub(INDENT.width() + CURSOR.width());

    let mut lines = Vec::new();
    for field in Field::ALL {
        let field_focused = focused && app.form.focus == FormFocus::Input(field);
        lines.push(label_line(field));
        lines.push(value_line(
            app.session.draft().get(field),
            texts.placeholder(field),
            field_focused,
            value_width,
        ));
        lines.push(Line::from(""));
    }

    if let Some(error) = app.session.error() {
        let message = match error {
            FormError::MissingRequiredFields => texts.required_error.to_string(),
            FormError::RecordNotFound(id) => format!("{}{id}", texts.not_found_error),
        };
        lines.push(Line::styled(
            format!("{INDENT}⚠ {message}"),
            Style::default().fg(c.error),
        ));
        lines.push(Line::from(""));
    }

    let submit_label = if app.session.is_editing() {
        texts.update
    } else {
        texts.submit
    };
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        button(
            texts.clear,
            focused && app.form.focus == FormFocus::ClearButton,
            Style::default().fg(c.fg),
        ),
        Span::raw("  "),
        button(
            submit_label,
            focused && app.form.focus == FormFocus::SubmitButton,
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn label_line(field: Field) -> Line<'static> {
    let c = colors();
    let mut spans = vec![Span::styled(
        t().form.label(field),
        Style::default().fg(c.muted),
    )];
    if field.is_required() {
        spans.push(Span::styled(" *", Style::default().fg(c.error)));
    }
    Line::from(spans)
}

fn value_line(value: &str, placeholder: &str, focused: bool, width: usize) -> Line<'static> {
    let c = colors();

    if value.is_empty() && !focused {
        return Line::styled(
            format!("{INDENT}{placeholder}"),
            Style::default().fg(c.muted),
        );
    }

    if focused {
        Line::styled(
            format!("{INDENT}{}{CURSOR}", fit_tail(value, width)),
            Style::default().fg(c.highlight),
        )
    } else {
        Line::styled(
            format!("{INDENT}{}", fit_tail(value, width)),
            Style::default().fg(c.fg),
        )
    }
}

fn button(label: &str, focused: bool, style: Style) -> Span<'static> {
    let style = if focused { Styles::selected() } else { style };
    Span::styled(format!("[ {label} ]"), style)
}

/// Longest suffix of `value` that fits in `max_width` columns
fn fit_tail(value: &str, max_width: usize) -> &str {
    if value.width() <= max_width {
        return value;
    }

    let mut width = 0;
    let mut start = value.len();
    for (index, ch) in value.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = index;
    }
    &value[start..]
}
