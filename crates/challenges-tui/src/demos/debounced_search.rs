use crate::components::PanelConfig;
use crate::dialog::{handle_text_input, InputAction};
use crate::theme::{label_text, normal_text};
use challenges_core::{DebounceConfig, Debouncer, TextInput};
use challenges_domain::search::filter_results;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Search box whose queries only run once typing has paused.
#[derive(Debug, Clone)]
pub struct DebouncedSearchDemo {
    input: TextInput,
    debouncer: Debouncer<String>,
    debounced: String,
    latency: Duration,
    in_flight: Option<(String, Instant)>,
    results: Vec<&'static str>,
    api_calls: usize,
}

impl DebouncedSearchDemo {
    pub fn new(config: &DebounceConfig) -> Self {
        Self {
            input: TextInput::new(),
            debouncer: Debouncer::new(config.delay()),
            debounced: String::new(),
            latency: config.search_latency(),
            in_flight: None,
            results: Vec::new(),
            api_calls: 0,
        }
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn debounced_term(&self) -> &str {
        &self.debounced
    }

    pub fn results(&self) -> &[&'static str] {
        &self.results
    }

    pub fn api_calls(&self) -> usize {
        self.api_calls
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Editing keys go to the input. `Esc` is left to the caller.
    pub fn handle_key(&mut self, key_code: KeyCode, now: Instant) -> bool {
        match handle_text_input(&mut self.input, key_code) {
            InputAction::Changed => {
                self.debouncer.push(self.input.as_str().to_string(), now);
                true
            }
            InputAction::Moved => true,
            InputAction::Confirm | InputAction::Cancel | InputAction::Ignored => false,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(term) = self.debouncer.poll(now) {
            self.settle(term, now);
        }

        let finished = matches!(&self.in_flight, Some((_, done_at)) if now >= *done_at);
        if finished {
            if let Some((term, _)) = self.in_flight.take() {
                self.results = filter_results(&term);
                self.api_calls += 1;
                tracing::debug!(
                    "Search '{}' returned {} results (call #{})",
                    term,
                    self.results.len(),
                    self.api_calls
                );
            }
        }
    }

    // A new debounced term replaces any search still in flight.
    fn settle(&mut self, term: String, now: Instant) {
        if term == self.debounced {
            return;
        }
        self.debounced = term;
        if self.debounced.is_empty() {
            self.in_flight = None;
            self.results.clear();
        } else {
            self.in_flight = Some((self.debounced.clone(), now + self.latency));
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let panel = PanelConfig::new("Debounced Search").focused(focused);
        let block = panel.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("API calls: {}", self.api_calls),
                label_text(),
            )),
            chunks[0],
        );

        let (text, style) = if self.input.is_empty() {
            (
                format!("Type to search ({}ms debounce)...", self.debouncer.delay().as_millis()),
                label_text(),
            )
        } else {
            (self.input.as_str().to_string(), normal_text())
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, style)).block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );
        if focused {
            frame.set_cursor_position((
                chunks[1].x + 1 + cursor_column(self.input.cursor(), chunks[1].width),
                chunks[1].y + 1,
            ));
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(
                    "Input: \"{}\" → Debounced: \"{}\"",
                    self.input.as_str(),
                    self.debounced
                ),
                label_text(),
            )),
            chunks[2],
        );

        let body: Vec<Line> = if self.is_searching() {
            vec![Line::from(Span::styled(
                "Searching...",
                label_text().add_modifier(Modifier::ITALIC),
            ))]
        } else if !self.results.is_empty() {
            self.results
                .iter()
                .map(|result| Line::from(Span::styled(format!("  {}", result), normal_text())))
                .collect()
        } else if !self.debounced.is_empty() {
            vec![Line::from(Span::styled("No results found", label_text()))]
        } else {
            vec![Line::from(Span::styled("Start typing to search...", label_text()))]
        };
        frame.render_widget(
            Paragraph::new(body).block(Block::default().borders(Borders::ALL)),
            chunks[3],
        );
    }
}

/// Column of the text cursor inside a bordered box of `box_width`,
/// pinned to the last inner column when the input is longer than the box.
fn cursor_column(cursor: usize, box_width: u16) -> u16 {
    let last_inner = box_width.saturating_sub(3);
    u16::try_from(cursor).unwrap_or(u16::MAX).min(last_inner)
}
