//! Key translation for `tui_input` text fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Map a key press to an edit request. `None` means the key is not a text
/// editing key.
pub fn request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('a') if ctrl => Some(InputRequest::GoToStart),
        KeyCode::Char('e') if ctrl => Some(InputRequest::GoToEnd),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

/// Apply `key` to `input`. Returns the new value when the text changed.
pub fn edit(input: &mut Input, key: KeyEvent) -> Option<String> {
    let before = input.value().to_owned();
    input.handle(request(key)?);
    (input.value() != before).then(|| input.value().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_reports_new_value() {
        let mut input = Input::default();
        assert_eq!(edit(&mut input, press(KeyCode::Char('l'))), Some("l".into()));
        assert_eq!(edit(&mut input, press(KeyCode::Char('a'))), Some("la".into()));
        assert_eq!(edit(&mut input, press(KeyCode::Backspace)), Some("l".into()));
    }

    #[test]
    fn cursor_moves_do_not_report() {
        let mut input = Input::default().with_value("lagos".into());
        assert_eq!(edit(&mut input, press(KeyCode::Left)), None);
        assert_eq!(edit(&mut input, press(KeyCode::Enter)), None);
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut input = Input::default().with_value("unilag".into());
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(edit(&mut input, key), Some(String::new()));
    }
}
