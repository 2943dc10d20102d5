//! Renders challenge statements (a small markdown subset) into styled lines.

use crate::theme::{heading, inline_code, label_text};
use pulldown_cmark::{CowStr, Event, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut renderer = MarkdownRenderer::new();
    for event in Parser::new(text) {
        renderer.process_event(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct MarkdownRenderer {
    lines: Vec<Line<'static>>,
    current_line: Vec<Span<'static>>,
    in_code_block: bool,
    code_block_content: String,
    emphasis: usize,
    strong: usize,
    in_heading: bool,
    list_depth: usize,
}

impl MarkdownRenderer {
    fn new() -> Self {
        Self::default()
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.handle_tag_start(tag),
            Event::End(tag_end) => self.handle_tag_end(tag_end),
            Event::Text(text) => self.handle_text(text),
            Event::Code(code) => self.handle_inline_code(code),
            Event::SoftBreak => self.current_line.push(Span::raw(" ")),
            Event::HardBreak => self.flush_line(),
            _ => {}
        }
    }

    fn handle_tag_start(&mut self, tag: Tag) {
        match tag {
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strong => self.strong += 1,
            Tag::Heading { .. } => {
                self.flush_line();
                self.in_heading = true;
            }
            Tag::Paragraph => self.flush_line(),
            Tag::List(_) => {
                self.flush_line();
                self.list_depth += 1;
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.current_line
                    .push(Span::styled(format!("{}• ", indent), label_text()));
            }
            _ => {}
        }
    }

    fn handle_tag_end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.render_code_block();
                self.lines.push(Line::from(""));
            }
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Heading(_) => {
                self.in_heading = false;
                self.flush_line();
                self.lines.push(Line::from(""));
            }
            TagEnd::Paragraph => {
                self.flush_line();
                if self.list_depth == 0 {
                    self.lines.push(Line::from(""));
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::List(_) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.lines.push(Line::from(""));
                }
            }
            _ => {}
        }
    }

    fn text_style(&self) -> Style {
        let mut style = if self.in_heading {
            heading()
        } else {
            Style::default()
        };
        if self.strong > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.emphasis > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn handle_text(&mut self, text: CowStr) {
        if self.in_code_block {
            self.code_block_content.push_str(&text);
        } else {
            let style = self.text_style();
            self.current_line.push(Span::styled(text.to_string(), style));
        }
    }

    fn handle_inline_code(&mut self, code: CowStr) {
        self.current_line
            .push(Span::styled(code.to_string(), inline_code()));
    }

    fn render_code_block(&mut self) {
        for line in self.code_block_content.lines() {
            self.lines
                .push(Line::from(Span::styled(format!("    {}", line), inline_code())));
        }
        self.code_block_content.clear();
    }

    fn flush_line(&mut self) {
        if !self.current_line.is_empty() {
            let line = Line::from(std::mem::take(&mut self.current_line));
            self.lines.push(line);
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self
            .lines
            .last()
            .is_some_and(|line| line.spans.iter().all(|s| s.content.is_empty()))
        {
            self.lines.pop();
        }
        self.lines
    }
}
