//! Interactive previews attached to challenges.

pub mod debounced_search;
pub mod nested_comments;
pub mod virtual_list;

pub use debounced_search::DebouncedSearchDemo;
pub use nested_comments::NestedCommentsDemo;
pub use virtual_list::VirtualListDemo;

use challenges_core::{AppConfig, ChallengeResult};
use challenges_domain::{CommentThread, DemoKind};
use crossterm::event::KeyCode;
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

/// Live state of the demo for the selected challenge. Rebuilt whenever the
/// selected challenge changes.
#[derive(Debug, Clone)]
pub enum DemoState {
    NestedComments(NestedCommentsDemo),
    DebouncedSearch(DebouncedSearchDemo),
    VirtualList(VirtualListDemo),
}

impl DemoState {
    pub fn for_kind(kind: DemoKind, config: &AppConfig) -> ChallengeResult<Self> {
        Ok(match kind {
            DemoKind::NestedComments => {
                DemoState::NestedComments(NestedCommentsDemo::new(CommentThread::sample()))
            }
            DemoKind::UseDebounce => {
                DemoState::DebouncedSearch(DebouncedSearchDemo::new(&config.debounce))
            }
            DemoKind::VirtualList => {
                DemoState::VirtualList(VirtualListDemo::new(&config.virtual_list)?)
            }
        })
    }

    pub fn kind(&self) -> DemoKind {
        match self {
            DemoState::NestedComments(_) => DemoKind::NestedComments,
            DemoState::DebouncedSearch(_) => DemoKind::UseDebounce,
            DemoState::VirtualList(_) => DemoKind::VirtualList,
        }
    }

    /// Whether the demo consumed the key.
    pub fn handle_key(&mut self, key_code: KeyCode, now: Instant) -> bool {
        match self {
            DemoState::NestedComments(demo) => demo.handle_key(key_code),
            DemoState::DebouncedSearch(demo) => demo.handle_key(key_code, now),
            DemoState::VirtualList(demo) => demo.handle_key(key_code),
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let DemoState::DebouncedSearch(demo) = self {
            demo.on_tick(now);
        }
    }

    /// Text entry demos take every printable key while focused.
    pub fn captures_text(&self) -> bool {
        matches!(self, DemoState::DebouncedSearch(_))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        match self {
            DemoState::NestedComments(demo) => demo.render(frame, area, focused),
            DemoState::DebouncedSearch(demo) => demo.render(frame, area, focused),
            DemoState::VirtualList(demo) => demo.render(frame, area, focused),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind_round_trips() {
        let config = AppConfig::default();
        for kind in [
            DemoKind::NestedComments,
            DemoKind::UseDebounce,
            DemoKind::VirtualList,
        ] {
            assert_eq!(DemoState::for_kind(kind, &config).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_only_search_captures_text() {
        let config = AppConfig::default();
        let search = DemoState::for_kind(DemoKind::UseDebounce, &config).unwrap();
        let list = DemoState::for_kind(DemoKind::VirtualList, &config).unwrap();
        assert!(search.captures_text());
        assert!(!list.captures_text());
    }
}
