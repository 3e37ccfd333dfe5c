use jobboard_core::{AppViewModel, FieldState, LoadStatus, COLUMN_TITLES, REQUEST_ID_PLACEHOLDER};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Row, Table};
use ratatui::Frame;

use super::constants::*;
use super::layout;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::split(frame.area());

    render_input(frame, areas.input, view);

    if let Some(message) = view.validation_message {
        frame.render_widget(
            Paragraph::new(message).style(Style::new().fg(Color::Red)),
            areas.validation,
        );
    }

    let header = Row::new(COLUMN_TITLES).style(Style::new().add_modifier(Modifier::BOLD));
    let rows = view.rows.iter().map(|row| Row::new(row.cells()));
    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(Block::bordered().title(TABLE_TITLE));
    frame.render_widget(table, areas.table);

    frame.render_widget(
        Paragraph::new(status_text(view)).style(Style::new().add_modifier(Modifier::REVERSED)),
        areas.status,
    );
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let border = if view.field_state == FieldState::Invalid {
        Style::new().fg(Color::Red)
    } else {
        Style::new()
    };
    let content = if view.input_text.is_empty() {
        Span::styled(REQUEST_ID_PLACEHOLDER, Style::new().fg(Color::DarkGray))
    } else {
        Span::raw(view.input_text.as_str())
    };
    frame.render_widget(
        Paragraph::new(content).block(Block::bordered().title(INPUT_TITLE).border_style(border)),
        area,
    );

    let max_offset = area.width.saturating_sub(2);
    let offset = cursor_offset(&view.input_text).min(max_offset);
    frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
}

/// Display columns taken by `text`; wide characters count twice.
fn cursor_offset(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

pub fn status_text(view: &AppViewModel) -> String {
    let state = match &view.load {
        LoadStatus::Pending => LOADING_TEXT.to_string(),
        LoadStatus::Loaded => format!("Jobs: {} / {}", view.rows.len(), view.total_jobs),
        LoadStatus::Failed(reason) => format!("Failed to load jobs: {reason}"),
    };
    format!("{state} | {KEY_HINTS}")
}
