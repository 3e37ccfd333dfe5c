use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub input: Rect,
    pub validation: Rect,
    pub table: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> AppLayout {
    let [input, validation, table, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    AppLayout {
        input,
        validation,
        table,
        status,
    }
}
