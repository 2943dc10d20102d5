//! Viewport windowing for virtualized lists.
//!
//! Maps a scroll position over a list of fixed-height rows to the contiguous
//! range of rows that must be materialized, widened by a buffer on each side,
//! plus the offset at which that range is drawn inside the full-height
//! virtual canvas. Knows nothing about rendering.

use crate::{ChallengeError, ChallengeResult};
use std::ops::Range;

/// Layout constants of one virtualized list.
///
/// Validated once at construction; a list keeps its layout for its whole
/// lifetime and recomputes a [`Window`] on every scroll or item-count change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    item_height: f64,
    viewport_height: f64,
    buffer: usize,
}

/// The materialized slice of a virtualized list.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Indices to render. Empty when nothing is visible.
    pub range: Range<usize>,
    /// Translation applied to the rendered block, always `start_index * item_height`.
    pub offset_y: f64,
    /// Height of the whole virtual canvas, `item_count * item_height`.
    pub total_height: f64,
}

impl WindowLayout {
    /// Create a layout, rejecting non-positive or non-finite heights.
    pub fn new(item_height: f64, viewport_height: f64, buffer: usize) -> ChallengeResult<Self> {
        if !(item_height.is_finite() && item_height > 0.0) {
            return Err(ChallengeError::invalid_layout("item_height", item_height));
        }
        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            return Err(ChallengeError::invalid_layout(
                "viewport_height",
                viewport_height,
            ));
        }
        Ok(Self {
            item_height,
            viewport_height,
            buffer,
        })
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn buffer(&self) -> usize {
        self.buffer
    }

    /// Height of the virtual canvas for `item_count` rows.
    pub fn total_height(&self, item_count: usize) -> f64 {
        item_count as f64 * self.item_height
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll_offset(&self, item_count: usize) -> f64 {
        (self.total_height(item_count) - self.viewport_height).max(0.0)
    }

    /// Compute the window for the given scroll offset.
    ///
    /// `scroll_offset` must be finite and non-negative.
    pub fn window(&self, scroll_offset: f64, item_count: usize) -> Window {
        debug_assert!(
            scroll_offset.is_finite() && scroll_offset >= 0.0,
            "scroll_offset must be finite and non-negative, got {scroll_offset}"
        );

        // Float to usize casts saturate, so huge offsets land on usize::MAX.
        let first_visible = (scroll_offset / self.item_height).floor() as usize;
        let last_visible =
            ((scroll_offset + self.viewport_height) / self.item_height).floor() as usize;
        let start = first_visible.saturating_sub(self.buffer);
        // Exclusive end. The inclusive bound is clamped to the last row.
        let end = match item_count.checked_sub(1) {
            Some(last_row) => last_visible.saturating_add(self.buffer).min(last_row) + 1,
            None => start,
        };

        Window {
            range: start..end.max(start),
            offset_y: start as f64 * self.item_height,
            total_height: self.total_height(item_count),
        }
    }
}

impl Window {
    pub fn start_index(&self) -> usize {
        self.range.start
    }

    /// Inclusive index of the last row to render, `None` when empty.
    pub fn end_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.range.end - 1)
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }
}

/// One-shot form that validates every input, including the scroll offset.
pub fn compute_window(
    scroll_offset: f64,
    item_count: usize,
    item_height: f64,
    viewport_height: f64,
    buffer: usize,
) -> ChallengeResult<Window> {
    if !(scroll_offset.is_finite() && scroll_offset >= 0.0) {
        return Err(ChallengeError::invalid_layout(
            "scroll_offset",
            scroll_offset,
        ));
    }
    let layout = WindowLayout::new(item_height, viewport_height, buffer)?;
    Ok(layout.window(scroll_offset, item_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_layout() -> WindowLayout {
        WindowLayout::new(60.0, 300.0, 3).unwrap()
    }

    #[test]
    fn test_window_at_top() {
        let window = demo_layout().window(0.0, 10_000);

        assert_eq!(window.start_index(), 0);
        assert_eq!(window.end_index(), Some(8));
        assert_eq!(window.offset_y, 0.0);
        assert_eq!(window.total_height, 600_000.0);
        assert_eq!(window.len(), 9);
    }

    #[test]
    fn test_window_mid_scroll() {
        let window = demo_layout().window(1200.0, 10_000);

        assert_eq!(window.start_index(), 17);
        assert_eq!(window.end_index(), Some(28));
        assert_eq!(window.offset_y, 1020.0);
    }

    #[test]
    fn test_empty_list() {
        let layout = demo_layout();
        for scroll in [0.0, 59.0, 1200.0, 1e6] {
            let window = layout.window(scroll, 0);
            assert!(window.is_empty());
            assert_eq!(window.end_index(), None);
            assert_eq!(window.total_height, 0.0);
            assert_eq!(window.offset_y, window.start_index() as f64 * 60.0);
        }
    }

    #[test]
    fn test_max_scroll_reaches_last_item() {
        let layout = demo_layout();
        let count = 10_000;
        let window = layout.window(layout.max_scroll_offset(count), count);

        assert_eq!(window.end_index(), Some(count - 1));
        assert!(!window.contains(count));
    }

    #[test]
    fn test_overscroll_never_exceeds_bounds() {
        let layout = demo_layout();
        let window = layout.window(layout.total_height(20) + 10_000.0, 20);

        assert!(window.is_empty());
        assert_eq!(window.range.clone().filter(|&i| i >= 20).count(), 0);
        assert_eq!(window.offset_y, window.start_index() as f64 * 60.0);
    }

    #[test]
    fn test_short_list_fits_entirely() {
        let window = demo_layout().window(0.0, 4);
        assert_eq!(window.range, 0..4);
        assert_eq!(window.total_height, 240.0);
    }

    #[test]
    fn test_zero_buffer() {
        let layout = WindowLayout::new(10.0, 35.0, 0).unwrap();
        let window = layout.window(25.0, 100);
        // rows 2..=6: floor(25/10)=2, floor(60/10)=6
        assert_eq!(window.range, 2..7);
        assert_eq!(window.offset_y, 20.0);
    }

    #[test]
    fn test_monotonic_in_scroll_offset() {
        let layout = demo_layout();
        let count = 500;
        let mut prev = layout.window(0.0, count);
        let mut scroll = 0.0;
        while scroll <= layout.max_scroll_offset(count) + 600.0 {
            let next = layout.window(scroll, count);
            assert!(next.start_index() >= prev.start_index());
            assert!(next.range.end >= prev.range.end || next.is_empty());
            prev = next;
            scroll += 7.5;
        }
    }

    #[test]
    fn test_invariants_hold_across_scroll_range() {
        let layout = WindowLayout::new(17.0, 123.0, 2).unwrap();
        for count in [1usize, 2, 7, 50] {
            let mut scroll = 0.0;
            while scroll <= layout.max_scroll_offset(count) {
                let window = layout.window(scroll, count);
                let end = window.end_index().expect("non-empty within scroll range");
                assert!(window.start_index() <= end);
                assert!(end < count);
                assert_eq!(window.offset_y, window.start_index() as f64 * 17.0);
                assert_eq!(window.total_height, count as f64 * 17.0);
                scroll += 3.0;
            }
        }
    }

    #[test]
    fn test_huge_buffer_covers_whole_list() {
        let window = compute_window(1200.0, 100, 60.0, 300.0, usize::MAX).unwrap();
        assert_eq!(window.range, 0..100);
        assert_eq!(window.offset_y, 0.0);
    }

    #[test]
    fn test_huge_scroll_offset_is_empty() {
        let window = compute_window(1e19, 10, 1.0, 1.0, 3).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.total_height, 10.0);

        let window = compute_window(f64::MAX, 10, 1.0, 1.0, usize::MAX).unwrap();
        assert_eq!(window.range, 0..10);
    }

    #[test]
    fn test_invariants_hold_for_extreme_inputs() {
        let scrolls = [0.0, 1.0, 59.9, 1200.0, 1e9, 1e19, 1e300, f64::MAX];
        let buffers = [0, 1, 3, usize::MAX / 2, usize::MAX];
        let counts = [0usize, 1, 10, 10_000];
        let h = 60.0;

        for &scroll in &scrolls {
            for &buffer in &buffers {
                for &count in &counts {
                    let window = compute_window(scroll, count, h, 300.0, buffer).unwrap();
                    assert!(window.range.start <= window.range.end);
                    assert!(window.range.end <= count || window.is_empty());
                    if let Some(end) = window.end_index() {
                        assert!(window.start_index() <= end);
                        assert!(end < count);
                    }
                    assert_eq!(window.offset_y, window.start_index() as f64 * h);
                    assert_eq!(window.total_height, count as f64 * h);
                }
            }
        }
    }

    #[test]
    fn test_rejects_invalid_layout() {
        assert!(matches!(
            WindowLayout::new(0.0, 300.0, 3),
            Err(ChallengeError::InvalidLayoutParameter {
                name: "item_height",
                ..
            })
        ));
        assert!(matches!(
            WindowLayout::new(60.0, -1.0, 3),
            Err(ChallengeError::InvalidLayoutParameter {
                name: "viewport_height",
                ..
            })
        ));
        assert!(WindowLayout::new(f64::NAN, 300.0, 3).is_err());
        assert!(WindowLayout::new(60.0, f64::INFINITY, 3).is_err());
    }

    #[test]
    fn test_compute_window_validates_scroll_offset() {
        assert!(compute_window(-1.0, 10, 60.0, 300.0, 3).is_err());
        assert!(compute_window(f64::NAN, 10, 60.0, 300.0, 3).is_err());

        let window = compute_window(1200.0, 10_000, 60.0, 300.0, 3).unwrap();
        assert_eq!(window.range, 17..29);
    }
}
