use crate::{
    app::{App, AppMode, ContentTab, Focus},
    components::{
        bullet_lines, centered_rect, render_popup_with_block, section_header, styled_list_item,
        ListItemConfig, PanelConfig,
    },
    keybindings::KeybindingRegistry,
    markdown::render_markdown,
    sidebar::SidebarRow,
    theme::{
        difficulty_style, focused_border, highlight_text, inline_code, label_text, mistake_text,
        normal_text,
    },
};
use challenges_core::ViewMode;
use challenges_domain::Challenge;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[0]);

    render_sidebar(app, frame, main[0]);
    render_content(app, frame, main[1]);
    render_footer(app, frame, chunks[1]);

    if let Some(banner) = &app.banner {
        banner.render(frame, main[1]);
    }

    match &app.mode {
        AppMode::SelectChallenge => render_selector_popup(app, frame),
        AppMode::Help(_) => render_help_popup(app, frame),
        AppMode::Normal => {}
    }
}

fn render_sidebar(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let panel = PanelConfig::new("Frontend Challenges")
        .with_hint("1")
        .focused(focused);
    let block = panel.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} coding challenges", app.catalog.len()),
            label_text(),
        )),
        chunks[0],
    );

    let lines: Vec<Line> = app
        .sidebar
        .rows()
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let config = ListItemConfig::new()
                .selected(app.sidebar.cursor.is_at(idx))
                .focused(focused);
            match row {
                SidebarRow::Domain(domain) => {
                    let marker = if app.sidebar.is_expanded(domain) {
                        "▾"
                    } else {
                        "▸"
                    };
                    let info = domain.info();
                    styled_list_item(
                        format!(
                            "{} {} {} ({})",
                            marker,
                            info.icon,
                            info.label,
                            app.catalog.count_by_domain(domain)
                        ),
                        &config,
                    )
                }
                SidebarRow::Subcategory(subcategory) => styled_list_item(
                    format!(
                        "{} ({})",
                        subcategory.info().label,
                        app.catalog.count_by_subcategory(subcategory)
                    ),
                    &config
                        .indent(1)
                        .active(subcategory == app.selected_subcategory),
                ),
            }
        })
        .collect();

    let visible = chunks[1].height as usize;
    let offset = app
        .sidebar
        .cursor
        .index()
        .map(|idx| (idx + 1).saturating_sub(visible))
        .unwrap_or(0);
    frame.render_widget(Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0)), chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled("Mid → Senior Level", label_text()))
            .alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let Some(challenge) = app.current_challenge() else {
        let empty = Paragraph::new("No challenges available.")
            .style(label_text())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let card = problem_lines(challenge);
    let card_height = u16::try_from(card.len()).unwrap_or(u16::MAX).saturating_add(2).min(area.height.saturating_sub(3) / 2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(card_height),
            Constraint::Min(0),
        ])
        .split(area);

    render_header(app, challenge, frame, chunks[0]);

    frame.render_widget(
        Paragraph::new(card)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    match app.view_mode {
        ViewMode::Tabs => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(chunks[2]);

            let selected = match app.active_tab {
                ContentTab::Code => 0,
                ContentTab::Preview => 1,
            };
            let tabs = Tabs::new(vec!["Solution Code", "Live Preview"])
                .select(selected)
                .style(label_text())
                .highlight_style(highlight_text().add_modifier(Modifier::BOLD));
            frame.render_widget(tabs, parts[0]);

            match app.active_tab {
                ContentTab::Code => render_code_section(app, challenge, frame, parts[1]),
                ContentTab::Preview => render_preview(app, frame, parts[1], PREVIEW_HINT_TABS),
            }
        }
        ViewMode::Split => {
            let parts = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[2]);
            render_code_section(app, challenge, frame, parts[0]);
            render_preview(app, frame, parts[1], PREVIEW_HINT_SPLIT);
        }
    }
}

fn render_header(app: &App, challenge: &Challenge, frame: &mut Frame, area: Rect) {
    let view = match app.view_mode {
        ViewMode::Tabs => "tabs",
        ViewMode::Split => "split",
    };
    let copy = if app.is_copied() {
        Span::styled("✓ Copied!", Style::default().fg(Color::Green))
    } else {
        Span::styled("c: Copy Code", label_text())
    };

    let line = Line::from(vec![
        Span::styled(
            challenge.title.clone(),
            normal_text().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", challenge.difficulty),
            difficulty_style(challenge.difficulty),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "{} › {}",
                challenge.domain.info().label,
                challenge.subcategory.info().label
            ),
            label_text(),
        ),
        Span::raw("  "),
        Span::styled(format!("[view: {}]", view), label_text()),
        Span::raw("  "),
        copy,
    ]);

    let panel = PanelConfig::new("Challenge")
        .with_hint("2")
        .focused(app.focus == Focus::Content);
    frame.render_widget(Paragraph::new(line).block(panel.block()), area);
}

fn problem_lines(challenge: &Challenge) -> Vec<Line<'static>> {
    let mut lines = vec![section_header("Problem Statement")];
    lines.extend(render_markdown(&challenge.statement));
    lines.push(Line::from(""));
    lines.push(section_header("Constraints & Edge Cases"));
    lines.extend(bullet_lines(&challenge.constraints, normal_text()));
    if let Some(complexity) = &challenge.complexity {
        lines.push(Line::from(""));
        lines.push(section_header("Complexity"));
        lines.push(Line::from(Span::styled(format!("  {}", complexity), inline_code())));
    }
    lines
}

fn render_code_section(app: &App, challenge: &Challenge, frame: &mut Frame, area: Rect) {
    let mistakes_height = u16::try_from(challenge.common_mistakes.len()).unwrap_or(u16::MAX).saturating_add(2).min(area.height / 3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(mistakes_height)])
        .split(area);

    let title = format!("Solution Code ({})", challenge.language);
    let panel = PanelConfig::new(&title).focused(app.focus == Focus::Content);
    frame.render_widget(
        Paragraph::new(app.code_lines.clone())
            .scroll((app.code_scroll, 0))
            .block(panel.block()),
        chunks[0],
    );

    let mistakes: Vec<Line> = challenge
        .common_mistakes
        .iter()
        .map(|mistake| {
            Line::from(vec![
                Span::styled("  ✗ ", mistake_text()),
                Span::styled(mistake.clone(), label_text()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(mistakes).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(mistake_text())
                .title("Common Mistakes"),
        ),
        chunks[1],
    );
}

const PREVIEW_HINT_TABS: &str = "This is an algorithm challenge - check the Solution Code tab.";
const PREVIEW_HINT_SPLIT: &str = "This is an algorithm challenge.";

fn render_preview(app: &App, frame: &mut Frame, area: Rect, hint: &str) {
    if let Some(demo) = &app.demo {
        demo.render(frame, area, app.focus == Focus::Demo);
        return;
    }

    let panel = PanelConfig::new("Live Preview").with_hint("3");
    let block = panel.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.height.saturating_sub(2) / 2;
    let lines = vec![
        Line::from(Span::styled(
            "Live preview not available for this challenge.",
            normal_text(),
        )),
        Line::from(Span::styled(hint.to_string(), label_text())),
    ];
    let text_area = Rect {
        y: inner.y + top,
        height: inner.height.saturating_sub(top),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let position = match app.challenge_position() {
        Some((pos, len)) if app.is_last_challenge() => format!("Challenge {} of {} (last)", pos, len),
        Some((pos, len)) => format!("Challenge {} of {}", pos, len),
        None => "No challenge selected".to_string(),
    };

    let provider = KeybindingRegistry::get_provider(app);
    let hints = provider.get_context().footer_hint();

    let line = Line::from(vec![
        Span::styled(position, highlight_text()),
        Span::styled(" | ", label_text()),
        Span::styled(hints, label_text()),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_selector_popup(app: &App, frame: &mut Frame) {
    let title = format!(
        "Select Challenge - {}",
        app.selected_subcategory.info().label
    );
    let inner = render_popup_with_block(frame, &title, 60, 50);

    let challenges = app.selector_challenges();
    let lines: Vec<Line> = if challenges.is_empty() {
        vec![Line::from(Span::styled(
            "No challenges in this subcategory yet.",
            label_text(),
        ))]
    } else {
        challenges
            .iter()
            .enumerate()
            .map(|(idx, challenge)| {
                let config = ListItemConfig::new()
                    .selected(app.selector.is_at(idx))
                    .focused(true)
                    .active(app.selected_challenge.as_deref() == Some(challenge.id.as_str()));
                styled_list_item(
                    format!("{} [{}]", challenge.title, challenge.difficulty),
                    &config,
                )
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_help_popup(app: &App, frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Help - Keybindings for Current Context")
        .borders(Borders::ALL)
        .border_style(focused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let context = KeybindingRegistry::get_provider(app).get_context();

    let mut lines = vec![
        Line::from(Span::styled(
            context.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let key_width = context
        .bindings
        .iter()
        .map(|b| b.key.chars().count())
        .max()
        .unwrap_or(0);
    for binding in &context.bindings {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:width$}", binding.key, width = key_width),
                highlight_text(),
            ),
            Span::raw("  "),
            Span::styled(binding.description.clone(), normal_text()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ESC or ? to close help",
        label_text().add_modifier(Modifier::ITALIC),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
