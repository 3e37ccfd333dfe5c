use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// New full text of the request-id field.
    Edit(String),
    Quit,
    Ignore,
}

/// Maps a key press to a field edit. Keys that leave the text unchanged are
/// ignored, so only real value changes reach the core.
pub fn key_action(current: &str, key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => {
            if current.is_empty() {
                KeyAction::Ignore
            } else {
                KeyAction::Edit(String::new())
            }
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut text = current.to_owned();
            text.push(ch);
            KeyAction::Edit(text)
        }
        KeyCode::Backspace if !current.is_empty() => {
            let mut text = current.to_owned();
            text.pop();
            KeyAction::Edit(text)
        }
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn characters_append_including_invalid_ones() {
        assert_eq!(
            key_action("12", press(KeyCode::Char('3'))),
            KeyAction::Edit("123".into())
        );
        assert_eq!(
            key_action("12", press(KeyCode::Char('a'))),
            KeyAction::Edit("12a".into())
        );
        assert_eq!(
            key_action("", KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyAction::Edit("A".into())
        );
    }

    #[test]
    fn backspace_removes_last_character() {
        assert_eq!(
            key_action("12a", press(KeyCode::Backspace)),
            KeyAction::Edit("12".into())
        );
        assert_eq!(key_action("", press(KeyCode::Backspace)), KeyAction::Ignore);
    }

    #[test]
    fn ctrl_u_clears_field() {
        assert_eq!(key_action("987", ctrl('u')), KeyAction::Edit(String::new()));
        assert_eq!(key_action("", ctrl('u')), KeyAction::Ignore);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(key_action("1", press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(key_action("1", ctrl('c')), KeyAction::Quit);
        assert_eq!(key_action("1", press(KeyCode::Enter)), KeyAction::Ignore);
    }
}
