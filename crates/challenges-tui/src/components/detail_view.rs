use crate::theme::{heading, label_text};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

pub fn section_header(title: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(title.into(), heading()))
}

/// One `• item` line per entry.
pub fn bullet_lines<S: AsRef<str>>(items: &[S], style: Style) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("  • ", label_text()),
                Span::styled(item.as_ref().to_string(), style),
            ])
        })
        .collect()
}
