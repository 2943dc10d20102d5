use challenges_core::TextInput;
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Key was not for the input.
    Ignored,
    /// Cursor moved, text unchanged.
    Moved,
    Changed,
    Cancel,
    Confirm,
}

/// Applies an editing key to a single-line input.
pub fn handle_text_input(input: &mut TextInput, key_code: KeyCode) -> InputAction {
    match key_code {
        KeyCode::Esc => InputAction::Cancel,
        KeyCode::Enter => InputAction::Confirm,
        KeyCode::Char(c) => {
            input.insert(c);
            InputAction::Changed
        }
        KeyCode::Backspace => edit(input, TextInput::backspace),
        KeyCode::Delete => edit(input, TextInput::delete),
        KeyCode::Left => {
            input.left();
            InputAction::Moved
        }
        KeyCode::Right => {
            input.right();
            InputAction::Moved
        }
        KeyCode::Home => {
            input.home();
            InputAction::Moved
        }
        KeyCode::End => {
            input.end();
            InputAction::Moved
        }
        _ => InputAction::Ignored,
    }
}

fn edit(input: &mut TextInput, op: fn(&mut TextInput)) -> InputAction {
    let before = input.as_str().len();
    op(input);
    if input.as_str().len() == before {
        InputAction::Moved
    } else {
        InputAction::Changed
    }
}
