use crate::theme::{active_item, normal_text, selected_item};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct ListItemConfig {
    pub is_selected: bool,
    pub is_focused: bool,
    pub is_active: bool,
    pub indent: usize,
}

impl ListItemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row under the cursor.
    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    /// Row that is the current choice, independent of the cursor.
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn item_style(&self) -> Style {
        let style = if self.is_active {
            active_item()
        } else {
            normal_text()
        };

        if self.is_selected {
            style.patch(selected_item(self.is_focused))
        } else {
            style
        }
    }

    pub fn item_prefix(&self) -> &'static str {
        if self.is_active {
            "● "
        } else {
            "  "
        }
    }
}

pub fn styled_list_item(text: impl Into<String>, config: &ListItemConfig) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{:indent$}{}{}",
            "",
            config.item_prefix(),
            text.into(),
            indent = config.indent * 2
        ),
        config.item_style(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    #[test]
    fn test_prefix_and_indent() {
        let line = styled_list_item("Recursive UI", &ListItemConfig::new().indent(1).active(true));
        assert_eq!(line.spans[0].content, "  ● Recursive UI");
    }

    #[test]
    fn test_selection_without_focus_underlines() {
        let style = ListItemConfig::new().selected(true).item_style();
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));

        let focused = ListItemConfig::new().selected(true).focused(true).item_style();
        assert!(focused.bg.is_some());
    }
}
