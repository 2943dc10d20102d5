use crate::theme::{focused_border, label_text, unfocused_border};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Bordered panel whose border colour follows focus. The optional hint is the
/// key that focuses the panel and is shown in the title.
pub struct PanelConfig<'a> {
    pub title: &'a str,
    pub hint: Option<&'a str>,
    pub is_focused: bool,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            hint: None,
            is_focused: false,
        }
    }

    pub fn with_hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn title_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        if let Some(hint) = self.hint {
            spans.push(Span::styled(format!("[{}] ", hint), label_text()));
        }
        spans.push(Span::styled(self.title, self.border_style()));
        Line::from(spans)
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title_line())
    }
}
