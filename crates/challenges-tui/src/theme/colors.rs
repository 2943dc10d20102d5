use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const ACTIVE_ITEM: Color = Color::Green;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const INLINE_CODE: Color = Color::LightMagenta;
pub const LINE_NUMBER: Color = Color::DarkGray;

pub const DIFFICULTY_SENIOR: Color = Color::Red;
pub const DIFFICULTY_MID: Color = Color::Gray;

pub const MISTAKE: Color = Color::LightRed;
pub const BUFFER_ROW: Color = Color::DarkGray;

pub const POPUP_BG: Color = Color::Black;
