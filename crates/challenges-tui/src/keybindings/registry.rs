use super::{
    content::ContentProvider, demo::DemoProvider, dialog_modes::SelectorProvider,
    sidebar::SidebarProvider, KeybindingProvider,
};
use crate::app::{App, AppMode, Focus};
use challenges_domain::DemoKind;

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        let demo = app.demo.as_ref().map(|d| d.kind());
        Self::get_provider_for_mode(&app.mode, app.focus, demo)
    }

    fn get_provider_for_mode(
        mode: &AppMode,
        focus: Focus,
        demo: Option<DemoKind>,
    ) -> Box<dyn KeybindingProvider> {
        match mode {
            AppMode::Normal => match (focus, demo) {
                (Focus::Sidebar, _) => Box::new(SidebarProvider),
                (Focus::Demo, Some(kind)) => Box::new(DemoProvider::new(kind)),
                (Focus::Content, _) | (Focus::Demo, None) => Box::new(ContentProvider),
            },
            AppMode::SelectChallenge => Box::new(SelectorProvider),
            AppMode::Help(previous_mode) => Self::get_provider_for_mode(previous_mode, focus, demo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(mode: AppMode, focus: Focus, demo: Option<DemoKind>) -> String {
        KeybindingRegistry::get_provider_for_mode(&mode, focus, demo)
            .get_context()
            .name
    }

    #[test]
    fn test_provider_per_focus() {
        assert_eq!(name(AppMode::Normal, Focus::Sidebar, None), "Sidebar");
        assert_eq!(name(AppMode::Normal, Focus::Content, None), "Challenge");
        assert_eq!(
            name(AppMode::Normal, Focus::Demo, Some(DemoKind::VirtualList)),
            "Demo - Virtual List"
        );
        assert_eq!(name(AppMode::Normal, Focus::Demo, None), "Challenge");
    }

    #[test]
    fn test_help_shows_underlying_mode() {
        let help = AppMode::Help(Box::new(AppMode::SelectChallenge));
        assert_eq!(name(help, Focus::Content, None), "Select Challenge");
    }

    #[test]
    fn test_footer_hint_format() {
        let hint = SelectorProvider.get_context().footer_hint();
        assert_eq!(hint, "j/k: navigate | enter: select | esc: cancel");
    }
}
