use crate::cli::WindowArgs;
use crate::output;
use challenges_core::{compute_window, VirtualListConfig, Window};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WindowOutput {
    start_index: usize,
    /// Inclusive; absent when nothing is rendered.
    end_index: Option<usize>,
    rendered: usize,
    offset_y: f64,
    total_height: f64,
}

impl From<Window> for WindowOutput {
    fn from(window: Window) -> Self {
        Self {
            start_index: window.start_index(),
            end_index: window.end_index(),
            rendered: window.len(),
            offset_y: window.offset_y,
            total_height: window.total_height,
        }
    }
}

pub fn handle(defaults: &VirtualListConfig, args: WindowArgs) -> anyhow::Result<()> {
    let result = compute_window(
        args.scroll_offset,
        args.item_count,
        args.item_height.unwrap_or(defaults.item_height),
        args.viewport_height.unwrap_or(defaults.viewport_height),
        args.buffer.unwrap_or(defaults.buffer),
    );

    match result {
        Ok(window) => output::output_success(WindowOutput::from(window)),
        Err(e) => output::output_error(&e.to_string()),
    }
}
