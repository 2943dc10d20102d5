use crate::components::{styled_list_item, ListItemConfig, PanelConfig};
use crate::theme::{bold_highlight, label_text};
use challenges_core::Cursor;
use challenges_domain::CommentThread;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct NestedCommentsDemo {
    thread: CommentThread,
    cursor: Cursor,
}

impl NestedCommentsDemo {
    pub fn new(thread: CommentThread) -> Self {
        let len = thread.visible_rows().len();
        Self {
            thread,
            cursor: Cursor::new(len),
        }
    }

    pub fn thread(&self) -> &CommentThread {
        &self.thread
    }

    pub fn selected_id(&self) -> Option<String> {
        let rows = self.thread.visible_rows();
        self.cursor
            .index()
            .and_then(|idx| rows.get(idx))
            .map(|row| row.node.id.clone())
    }

    /// Collapses or expands the replies of the selected comment.
    pub fn toggle_selected(&mut self) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        let toggled = self.thread.toggle(&id);
        self.cursor.set_len(self.thread.visible_rows().len());
        toggled
    }

    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char('j') | KeyCode::Down => self.cursor.down(),
            KeyCode::Char('k') | KeyCode::Up => self.cursor.up(),
            KeyCode::Char('g') | KeyCode::Home => self.cursor.first(),
            KeyCode::Char('G') | KeyCode::End => self.cursor.last(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_selected();
            }
            _ => return false,
        }
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = format!("Comments ({})", self.thread.top_level_count());
        let panel = PanelConfig::new(&title).focused(focused);

        let mut lines = Vec::new();
        for (idx, row) in self.thread.visible_rows().iter().enumerate() {
            let config = ListItemConfig::new()
                .indent(row.depth)
                .selected(self.cursor.is_at(idx))
                .focused(focused);

            let mut header = styled_list_item(
                format!("({}) {}", row.node.initial(), row.node.author),
                &config,
            );
            if let Some(label) = row.node.toggle_label() {
                header.spans.push(Span::styled(format!("  [{}]", label), bold_highlight()));
            }
            lines.push(header);

            let indent = "  ".repeat(row.depth + 2);
            lines.push(Line::from(Span::raw(format!("{}{}", indent, row.node.text))));
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled("No comments yet.", label_text())));
        }

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel.block());
        frame.render_widget(widget, area);
    }
}
