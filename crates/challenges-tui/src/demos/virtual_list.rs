//! Scrollable list of generated products that only materialises the
//! rows inside the computed window.

use crate::components::PanelConfig;
use crate::theme::{buffer_row, label_text, normal_text};
use challenges_core::{ChallengeResult, VirtualListConfig, Window, WindowLayout};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Pixels moved by one line step.
pub const LINE_STEP: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: usize,
    pub title: String,
    pub price: String,
}

impl Product {
    fn generate(index: usize) -> Self {
        // Deterministic pseudo-random cents in [0, 10000).
        let cents = (index.wrapping_mul(7919).wrapping_add(1301)) % 10_000;
        Self {
            id: index + 1,
            title: format!("Product {}", index + 1),
            price: format!("${}.{:02}", cents / 100, cents % 100),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VirtualListDemo {
    layout: WindowLayout,
    products: Vec<Product>,
    scroll_offset: f64,
}

impl VirtualListDemo {
    pub fn new(config: &VirtualListConfig) -> ChallengeResult<Self> {
        let layout = config.layout()?;
        Ok(Self {
            layout,
            products: (0..config.item_count).map(Product::generate).collect(),
            scroll_offset: 0.0,
        })
    }

    pub fn layout(&self) -> WindowLayout {
        self.layout
    }

    pub fn item_count(&self) -> usize {
        self.products.len()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn window(&self) -> Window {
        self.layout.window(self.scroll_offset, self.products.len())
    }

    /// Only the products inside the current window.
    pub fn rendered_products(&self) -> &[Product] {
        &self.products[self.window().range]
    }

    pub fn scroll_to(&mut self, offset: f64) {
        let max = self.layout.max_scroll_offset(self.products.len());
        self.scroll_offset = offset.clamp(0.0, max);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_offset + delta);
    }

    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        let page = self.layout.viewport_height();
        match key_code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(LINE_STEP),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-LINE_STEP),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to(0.0),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to(f64::MAX),
            _ => return false,
        }
        true
    }

    pub fn rendering_label(&self) -> String {
        format!("Rendering: {} items", self.window().len())
    }

    pub fn status_line(&self) -> String {
        let window = self.window();
        match window.end_index() {
            Some(end) => format!(
                "Scroll position: {}px | Items {} - {} visible",
                self.scroll_offset.round(),
                window.start_index() + 1,
                end + 1
            ),
            None => format!(
                "Scroll position: {}px | No items",
                self.scroll_offset.round()
            ),
        }
    }

    // Rows whose pixel span intersects the viewport; everything else in
    // the window is buffer.
    fn in_viewport(&self, index: usize) -> bool {
        let h = self.layout.item_height();
        let top = index as f64 * h;
        top + h > self.scroll_offset && top < self.scroll_offset + self.layout.viewport_height()
    }

    /// Buffer rows between `offset_y` and the scroll position. The drawn
    /// block is shifted up by this many lines so each row sits at its own
    /// scroll position, one terminal line per item.
    pub fn rows_above_viewport(&self) -> usize {
        let window = self.window();
        if window.is_empty() {
            return 0;
        }
        let shift = (self.scroll_offset - window.offset_y).max(0.0);
        ((shift / self.layout.item_height()).floor() as usize).min(window.len())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = format!("Virtual List ({} items)", self.products.len());
        let panel = PanelConfig::new(&title).focused(focused);
        let block = panel.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(self.rendering_label(), label_text())),
            chunks[0],
        );

        let window = self.window();
        let lines: Vec<Line> = self
            .rendered_products()
            .iter()
            .enumerate()
            .map(|(offset, product)| {
                let index = window.start_index() + offset;
                let style = if self.in_viewport(index) {
                    normal_text()
                } else {
                    buffer_row()
                };
                Line::from(vec![
                    Span::styled(format!("#{:<6}", product.id), label_text()),
                    Span::styled(format!("{:<16}", product.title), style),
                    Span::styled(product.price.clone(), style),
                ])
            })
            .collect();

        let list_area = chunks[1].inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        let skip = u16::try_from(self.rows_above_viewport()).unwrap_or(u16::MAX);
        frame.render_widget(Paragraph::new(lines).scroll((skip, 0)), list_area);

        let visible_rows =
            (self.layout.viewport_height() / self.layout.item_height()).ceil() as usize;
        let mut scrollbar_state = ScrollbarState::new(self.products.len())
            .viewport_content_length(visible_rows)
            .position(window.start_index() + self.rows_above_viewport());
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            chunks[1],
            &mut scrollbar_state,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(self.status_line(), label_text())),
            chunks[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn demo() -> VirtualListDemo {
        VirtualListDemo::new(&VirtualListConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_window() {
        let demo = demo();
        assert_eq!(demo.item_count(), 10_000);
        assert_eq!(demo.window().range, 0..9);
        assert_eq!(demo.rendering_label(), "Rendering: 9 items");
        assert_eq!(demo.status_line(), "Scroll position: 0px | Items 1 - 9 visible");
        assert_eq!(demo.rendered_products()[0].title, "Product 1");
    }

    #[test]
    fn test_scrolling_moves_window() {
        let mut demo = demo();
        demo.scroll_to(1200.0);
        let window = demo.window();
        assert_eq!(window.range, 17..29);
        assert_eq!(window.offset_y, 1020.0);
        assert_eq!(demo.rendered_products()[0].id, 18);
        assert_eq!(
            demo.status_line(),
            "Scroll position: 1200px | Items 18 - 29 visible"
        );
    }

    #[test]
    fn test_rows_above_viewport() {
        let mut demo = demo();
        assert_eq!(demo.rows_above_viewport(), 0);

        demo.scroll_to(1200.0);
        assert_eq!(demo.rows_above_viewport(), 3);

        // Partially scrolled past row 20 still leaves it in view.
        demo.scroll_to(1230.0);
        assert_eq!(demo.rows_above_viewport(), 3);

        demo.scroll_to(60.0);
        assert_eq!(demo.rows_above_viewport(), 1);
    }

    fn first_drawn_product(demo: &VirtualListDemo) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| demo.render(frame, frame.area(), true))
            .unwrap();

        let buf = terminal.backend().buffer().clone();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .find(|line| line.contains('#') && line.contains("Product "))
            .unwrap()
    }

    #[test]
    fn test_render_starts_at_scroll_position() {
        let mut demo = demo();
        assert!(first_drawn_product(&demo).contains("Product 1 "));

        demo.scroll_to(1200.0);
        let first = first_drawn_product(&demo);
        assert!(first.contains("Product 21 "), "got {first:?}");
    }

    #[test]
    fn test_keys_step_and_clamp() {
        let mut demo = demo();
        assert!(demo.handle_key(KeyCode::Char('k')));
        assert_eq!(demo.scroll_offset(), 0.0);

        demo.handle_key(KeyCode::Char('j'));
        demo.handle_key(KeyCode::Down);
        assert_eq!(demo.scroll_offset(), 40.0);

        demo.handle_key(KeyCode::PageDown);
        assert_eq!(demo.scroll_offset(), 340.0);

        demo.handle_key(KeyCode::Char('G'));
        assert_eq!(demo.scroll_offset(), 600_000.0 - 300.0);
        assert_eq!(demo.window().end_index(), Some(9_999));

        demo.handle_key(KeyCode::Char('j'));
        assert_eq!(demo.scroll_offset(), 599_700.0);

        demo.handle_key(KeyCode::Home);
        assert_eq!(demo.window().start_index(), 0);
        assert!(!demo.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn test_renders_only_window_regardless_of_size() {
        let mut demo = demo();
        for _ in 0..50 {
            demo.handle_key(KeyCode::PageDown);
            assert!(demo.rendered_products().len() <= 12);
        }
    }

    #[test]
    fn test_empty_list() {
        let config = VirtualListConfig {
            item_count: 0,
            ..VirtualListConfig::default()
        };
        let mut demo = VirtualListDemo::new(&config).unwrap();
        demo.handle_key(KeyCode::PageDown);
        assert_eq!(demo.scroll_offset(), 0.0);
        assert!(demo.rendered_products().is_empty());
        assert_eq!(demo.rendering_label(), "Rendering: 0 items");
        assert_eq!(demo.status_line(), "Scroll position: 0px | No items");
    }

    #[test]
    fn test_prices_are_deterministic() {
        assert_eq!(Product::generate(0), Product::generate(0));
        assert_eq!(Product::generate(0).price, "$13.01");
        assert!(Product::generate(42).price.starts_with('$'));
    }
}
