//! Syntax highlighting of solution code through syntect.

use crate::theme::line_number;
use challenges_domain::Language;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const FALLBACK_THEME: &str = "base16-ocean.dark";

pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme: Option<Theme>,
}

impl CodeHighlighter {
    /// Unknown theme names fall back to the default theme, then to plain text.
    pub fn new(theme_name: &str) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults().themes;

        let theme = match themes.remove(theme_name) {
            Some(theme) => Some(theme),
            None => {
                tracing::warn!(
                    "Unknown highlight theme '{}', using {}",
                    theme_name,
                    FALLBACK_THEME
                );
                themes.remove(FALLBACK_THEME)
            }
        };

        Self { syntax_set, theme }
    }

    /// Plain-text highlighter, used where colours are not wanted.
    pub fn plain() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme: None,
        }
    }

    // The bundled syntax set has no TypeScript grammar, so TS and TSX
    // borrow the JavaScript one.
    fn syntax_for(&self, language: Language) -> &SyntaxReference {
        [language.highlight_token(), "js"]
            .into_iter()
            .find_map(|token| self.syntax_set.find_syntax_by_token(token))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    /// Highlights `code` into one line per source line, each prefixed with a
    /// right-aligned line number gutter.
    pub fn highlight(&self, code: &str, language: Language) -> Vec<Line<'static>> {
        let width = code.lines().count().max(1).to_string().len();

        let Some(theme) = &self.theme else {
            return code
                .lines()
                .enumerate()
                .map(|(idx, text)| numbered(idx, width, vec![Span::raw(text.to_string())]))
                .collect();
        };

        let mut highlighter = HighlightLines::new(self.syntax_for(language), theme);
        let mut lines = Vec::new();

        for (idx, source_line) in LinesWithEndings::from(code).enumerate() {
            let spans = match highlighter.highlight_line(source_line, &self.syntax_set) {
                Ok(ranges) => ranges
                    .into_iter()
                    .map(|(style, text)| {
                        Span::styled(
                            text.trim_end_matches(['\n', '\r']).to_string(),
                            convert_style(style),
                        )
                    })
                    .collect(),
                Err(e) => {
                    tracing::debug!("Highlighting failed on line {}: {}", idx + 1, e);
                    vec![Span::raw(source_line.trim_end_matches(['\n', '\r']).to_string())]
                }
            };
            lines.push(numbered(idx, width, spans));
        }

        lines
    }
}

fn numbered(idx: usize, width: usize, mut spans: Vec<Span<'static>>) -> Line<'static> {
    spans.insert(
        0,
        Span::styled(format!("{:>width$} │ ", idx + 1, width = width), line_number()),
    );
    Line::from(spans)
}

fn convert_style(style: syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut converted = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        converted = converted.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        converted = converted.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        converted = converted.add_modifier(Modifier::UNDERLINED);
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_one_line_per_source_line_with_gutter() {
        let highlighter = CodeHighlighter::new(FALLBACK_THEME);
        let code = "const a = 1;\nconst b = 2;\n\nexport { a, b };";
        let lines = highlighter.highlight(code, Language::Typescript);

        assert_eq!(lines.len(), 4);
        assert_eq!(text_of(&lines[0]), "1 │ const a = 1;");
        assert_eq!(text_of(&lines[2]), "3 │ ");
        assert_eq!(text_of(&lines[3]), "4 │ export { a, b };");
    }

    #[test]
    fn test_colours_are_applied() {
        let highlighter = CodeHighlighter::new(FALLBACK_THEME);
        let lines = highlighter.highlight("function f() { return 1; }", Language::Javascript);
        let coloured = lines[0]
            .spans
            .iter()
            .skip(1)
            .filter(|s| matches!(s.style.fg, Some(Color::Rgb(..))))
            .count();
        assert!(coloured > 0);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let highlighter = CodeHighlighter::new("no-such-theme");
        let lines = highlighter.highlight("let x = 1;", Language::Tsx);
        assert_eq!(text_of(&lines[0]), "1 │ let x = 1;");
    }

    #[test]
    fn test_plain_has_no_colour() {
        let lines = CodeHighlighter::plain().highlight("a\nb", Language::Tsx);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[1].style, Style::default());
    }

    #[test]
    fn test_gutter_width_tracks_line_count() {
        let code = (1..=12).map(|i| format!("x{}", i)).collect::<Vec<_>>().join("\n");
        let lines = CodeHighlighter::plain().highlight(&code, Language::Javascript);
        assert_eq!(text_of(&lines[0]), " 1 │ x1");
        assert_eq!(text_of(&lines[11]), "12 │ x12");
    }
}
