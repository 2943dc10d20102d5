use super::colors::*;
use challenges_domain::Difficulty;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }
}

pub fn active_item() -> Style {
    Style::default()
        .fg(ACTIVE_ITEM)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn inline_code() -> Style {
    Style::default().fg(INLINE_CODE)
}

pub fn line_number() -> Style {
    Style::default().fg(LINE_NUMBER)
}

pub fn difficulty_style(difficulty: Difficulty) -> Style {
    let color = match difficulty {
        Difficulty::Senior => DIFFICULTY_SENIOR,
        Difficulty::Mid => DIFFICULTY_MID,
    };
    Style::default()
        .fg(color)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn mistake_text() -> Style {
    Style::default().fg(MISTAKE)
}

pub fn buffer_row() -> Style {
    Style::default().fg(BUFFER_ROW)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
