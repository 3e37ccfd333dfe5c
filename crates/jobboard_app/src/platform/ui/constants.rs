use ratatui::layout::Constraint;

pub const INPUT_TITLE: &str = "Filter by Request ID";
pub const TABLE_TITLE: &str = "Jobs";
pub const KEY_HINTS: &str = "Esc: quit  Ctrl+U: clear";
pub const LOADING_TEXT: &str = "Loading jobs...";

/// Widths for the seven job columns, in `COLUMN_TITLES` order.
pub const COLUMN_WIDTHS: [Constraint; 7] = [
    Constraint::Length(12),
    Constraint::Length(12),
    Constraint::Length(12),
    Constraint::Length(18),
    Constraint::Length(10),
    Constraint::Length(11),
    Constraint::Fill(1),
];
