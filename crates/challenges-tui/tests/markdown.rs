use challenges_tui::markdown::render_markdown;
use ratatui::style::Modifier;
use ratatui::text::Line;

fn plain(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_plain_text() {
    let lines = render_markdown("Render a nested thread.");
    assert_eq!(lines.len(), 1);
    assert_eq!(plain(&lines[0]), "Render a nested thread.");
}

#[test]
fn test_soft_breaks_join_into_one_line() {
    let lines = render_markdown("first half\nsecond half");
    assert_eq!(lines.len(), 1);
    assert_eq!(plain(&lines[0]), "first half second half");
}

#[test]
fn test_bold_and_italic() {
    let lines = render_markdown("Keep it **stable** and *pure*");
    let bold = lines[0].spans.iter().find(|s| s.content == "stable").unwrap();
    assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    let italic = lines[0].spans.iter().find(|s| s.content == "pure").unwrap();
    assert!(italic.style.add_modifier.contains(Modifier::ITALIC));
}

#[test]
fn test_inline_code_keeps_text() {
    let lines = render_markdown("Use `useMemo` sparingly");
    assert_eq!(plain(&lines[0]), "Use useMemo sparingly");
}

#[test]
fn test_multiple_paragraphs_are_separated() {
    let lines = render_markdown("First paragraph\n\nSecond paragraph");
    assert_eq!(lines.len(), 3);
    assert_eq!(plain(&lines[1]), "");
}

#[test]
fn test_bullet_list() {
    let lines = render_markdown("- one\n- two");
    let texts: Vec<String> = lines.iter().map(plain).collect();
    assert_eq!(texts, vec!["• one", "• two"]);
}

#[test]
fn test_code_block_is_indented() {
    let lines = render_markdown("```js\nconst a = 1;\n```");
    assert_eq!(plain(&lines[0]), "    const a = 1;");
}

#[test]
fn test_empty_text() {
    assert!(render_markdown("").is_empty());
}
