use crate::{
    clipboard::copy_to_clipboard,
    components::Banner,
    demos::DemoState,
    events::{Event, EventHandler},
    highlight::CodeHighlighter,
    sidebar::{Sidebar, SidebarRow},
    ui,
};
use challenges_core::{AppConfig, ChallengeResult, Cursor, ViewMode};
use challenges_domain::{Catalog, Challenge, DomainCategory, SkillSubcategory};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, text::Line, Terminal};
use std::io;
use std::time::Instant;

const CODE_PAGE: u16 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    SelectChallenge,
    Help(Box<AppMode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTab {
    Code,
    Preview,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub config: AppConfig,
    pub catalog: Catalog,
    pub sidebar: Sidebar,
    pub selected_subcategory: SkillSubcategory,
    pub selected_challenge: Option<String>,
    pub view_mode: ViewMode,
    pub active_tab: ContentTab,
    pub code_scroll: u16,
    pub code_lines: Vec<Line<'static>>,
    pub selector: Cursor,
    pub banner: Option<Banner>,
    pub demo: Option<DemoState>,
    highlighter: CodeHighlighter,
}

impl App {
    /// Builds the initial state. Fails only if the configured list layout is invalid.
    pub fn new(config: AppConfig, catalog: Catalog) -> ChallengeResult<Self> {
        config.virtual_list.layout()?;
        let highlighter = CodeHighlighter::new(config.effective_highlight_theme());
        Ok(Self::with_highlighter(config, catalog, highlighter))
    }

    /// Same as [`App::new`] with uncoloured code, for tests and dumb terminals.
    pub fn new_plain(config: AppConfig, catalog: Catalog) -> ChallengeResult<Self> {
        config.virtual_list.layout()?;
        Ok(Self::with_highlighter(config, catalog, CodeHighlighter::plain()))
    }

    fn with_highlighter(config: AppConfig, catalog: Catalog, highlighter: CodeHighlighter) -> Self {
        let first = catalog.first().map(|c| c.id.clone());
        let mut app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Focus::Sidebar,
            view_mode: config.effective_view_mode(),
            config,
            catalog,
            sidebar: Sidebar::new(&[DomainCategory::ReactArchitecture]),
            selected_subcategory: SkillSubcategory::RecursiveUi,
            selected_challenge: None,
            active_tab: ContentTab::Code,
            code_scroll: 0,
            code_lines: Vec::new(),
            selector: Cursor::new(0),
            banner: None,
            demo: None,
            highlighter,
        };
        if let Some(id) = first {
            app.select_challenge(&id);
        }
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn current_challenge(&self) -> Option<&Challenge> {
        self.selected_challenge
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    /// One-based position of the current challenge and the catalog size.
    pub fn challenge_position(&self) -> Option<(usize, usize)> {
        self.selected_challenge
            .as_deref()
            .and_then(|id| self.catalog.position(id))
            .map(|idx| (idx + 1, self.catalog.len()))
    }

    pub fn is_last_challenge(&self) -> bool {
        matches!(self.challenge_position(), Some((pos, len)) if pos == len)
    }

    pub fn preview_visible(&self) -> bool {
        self.view_mode == ViewMode::Split || self.active_tab == ContentTab::Preview
    }

    /// Challenges offered by the selector popup.
    pub fn selector_challenges(&self) -> Vec<&Challenge> {
        self.catalog
            .by_subcategory(self.selected_subcategory)
            .collect()
    }

    pub fn toggle_domain(&mut self, domain: DomainCategory) {
        self.sidebar.toggle(domain);
    }

    /// Opens a subcategory and jumps to its first challenge, if it has one.
    pub fn select_subcategory(&mut self, subcategory: SkillSubcategory) {
        self.selected_subcategory = subcategory;
        let first = self
            .catalog
            .by_subcategory(subcategory)
            .next()
            .map(|c| c.id.clone());
        tracing::debug!("Selected subcategory {}", subcategory);
        if let Some(id) = first {
            self.select_challenge(&id);
        }
    }

    /// Switches to the challenge with `id`. Unknown ids are ignored.
    pub fn select_challenge(&mut self, id: &str) -> bool {
        let Some(challenge) = self.catalog.get(id) else {
            tracing::warn!("Ignoring selection of unknown challenge '{}'", id);
            return false;
        };

        self.code_lines = self
            .highlighter
            .highlight(&challenge.code, challenge.language);
        self.demo = challenge.demo.and_then(|kind| {
            DemoState::for_kind(kind, &self.config)
                .map_err(|e| tracing::error!("Failed to start demo {}: {}", kind.key(), e))
                .ok()
        });
        self.selected_challenge = Some(challenge.id.clone());
        self.code_scroll = 0;

        if self.focus == Focus::Demo && self.demo.is_none() {
            self.focus = Focus::Content;
        }
        tracing::debug!("Selected challenge {}", id);
        true
    }

    /// Moves to the next challenge in catalog order and follows its subcategory.
    pub fn next_challenge(&mut self) {
        let next = self
            .selected_challenge
            .as_deref()
            .and_then(|id| self.catalog.next_after(id))
            .map(|c| (c.id.clone(), c.subcategory));

        if let Some((id, subcategory)) = next {
            self.select_challenge(&id);
            self.selected_subcategory = subcategory;
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(match self.view_mode {
            ViewMode::Tabs => ViewMode::Split,
            ViewMode::Split => ViewMode::Tabs,
        });
        if !self.preview_visible() && self.focus == Focus::Demo {
            self.focus = Focus::Content;
        }
    }

    pub fn toggle_tab(&mut self) {
        self.active_tab = match self.active_tab {
            ContentTab::Code => ContentTab::Preview,
            ContentTab::Preview => ContentTab::Code,
        };
        if !self.preview_visible() && self.focus == Focus::Demo {
            self.focus = Focus::Content;
        }
    }

    /// Focuses the demo, bringing the preview into view. No-op without a demo.
    pub fn focus_demo(&mut self) {
        if self.demo.is_some() {
            self.focus = Focus::Demo;
            if self.view_mode == ViewMode::Tabs {
                self.active_tab = ContentTab::Preview;
            }
        }
    }

    pub fn copy_code(&mut self, now: Instant) {
        let Some(code) = self.current_challenge().map(|c| c.code.clone()) else {
            return;
        };
        let result = copy_to_clipboard(&code);
        self.report_copy(result, now);
    }

    fn report_copy(&mut self, result: ChallengeResult<()>, now: Instant) {
        let ttl = self.config.copied_feedback();
        self.banner = Some(match result {
            Ok(()) => Banner::success("Copied!", now, ttl),
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                Banner::error(format!("Copy failed: {}", e), now, ttl)
            }
        });
    }

    pub fn is_copied(&self) -> bool {
        self.banner
            .as_ref()
            .is_some_and(|b| b.variant == crate::components::BannerVariant::Success)
    }

    pub fn open_selector(&mut self) {
        let challenges = self.selector_challenges();
        let current = self.selected_challenge.as_deref();
        let position = challenges.iter().position(|c| Some(c.id.as_str()) == current);
        let len = challenges.len();

        self.selector = Cursor::new(len);
        if let Some(idx) = position {
            self.selector.select(idx);
        }
        self.mode = AppMode::SelectChallenge;
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.banner = None;
        }
        if let Some(demo) = self.demo.as_mut() {
            demo.on_tick(now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.mode.clone() {
            AppMode::Help(previous) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    self.mode = *previous;
                }
            }
            AppMode::SelectChallenge => self.handle_selector_key(key.code),
            AppMode::Normal => self.handle_normal_key(key.code, now),
        }
    }

    fn handle_selector_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => self.mode = AppMode::Normal,
            KeyCode::Char('j') | KeyCode::Down => self.selector.down(),
            KeyCode::Char('k') | KeyCode::Up => self.selector.up(),
            KeyCode::Enter => {
                let id = self.selector.index().and_then(|idx| {
                    self.selector_challenges()
                        .get(idx)
                        .map(|c| c.id.clone())
                });
                if let Some(id) = id {
                    self.select_challenge(&id);
                }
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key_code: KeyCode, now: Instant) {
        if self.focus == Focus::Demo {
            if key_code == KeyCode::Esc {
                self.focus = Focus::Content;
                return;
            }
            if let Some(demo) = self.demo.as_mut() {
                if demo.handle_key(key_code, now) || demo.captures_text() {
                    return;
                }
            }
        }

        match key_code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.mode = AppMode::Help(Box::new(self.mode.clone())),
            KeyCode::Char('1') => self.focus = Focus::Sidebar,
            KeyCode::Char('2') => self.focus = Focus::Content,
            KeyCode::Char('3') => self.focus_demo(),
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Char('s') => self.open_selector(),
            KeyCode::Char('n') => self.next_challenge(),
            KeyCode::Char('v') => self.toggle_view_mode(),
            KeyCode::Char('t') => self.toggle_tab(),
            KeyCode::Char('c') => self.copy_code(now),
            _ => match self.focus {
                Focus::Sidebar => self.handle_sidebar_key(key_code),
                Focus::Content | Focus::Demo => self.handle_content_key(key_code),
            },
        }
    }

    fn cycle_focus(&mut self) {
        match self.focus {
            Focus::Sidebar => self.focus = Focus::Content,
            Focus::Content if self.demo.is_some() && self.preview_visible() => self.focus_demo(),
            Focus::Content | Focus::Demo => self.focus = Focus::Sidebar,
        }
    }

    fn handle_sidebar_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Char('j') | KeyCode::Down => self.sidebar.cursor.down(),
            KeyCode::Char('k') | KeyCode::Up => self.sidebar.cursor.up(),
            KeyCode::Char('g') | KeyCode::Home => self.sidebar.cursor.first(),
            KeyCode::Char('G') | KeyCode::End => self.sidebar.cursor.last(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.sidebar.selected_row() {
                Some(SidebarRow::Domain(domain)) => self.toggle_domain(domain),
                Some(SidebarRow::Subcategory(subcategory)) => self.select_subcategory(subcategory),
                None => {}
            },
            _ => {}
        }
    }

    fn handle_content_key(&mut self, key_code: KeyCode) {
        let last_line =
            u16::try_from(self.code_lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.code_scroll = match key_code {
            KeyCode::Char('j') | KeyCode::Down => self.code_scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.code_scroll.saturating_sub(1),
            KeyCode::PageDown => self.code_scroll.saturating_add(CODE_PAGE),
            KeyCode::PageUp => self.code_scroll.saturating_sub(CODE_PAGE),
            KeyCode::Char('g') | KeyCode::Home => 0,
            KeyCode::Char('G') | KeyCode::End => last_line,
            _ => return,
        }
        .min(last_line);
    }

    pub async fn run(&mut self) -> ChallengeResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> ChallengeResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key, Instant::now()),
                Some(Event::Tick) => self.on_tick(Instant::now()),
                Some(Event::Resize) => {}
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
