use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shortener_core::Msg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Msg(Msg),
    Quit,
    Ignore,
}

/// Translate a key press into a form message, given the current input text.
pub fn map_key(key: KeyEvent, current: &str) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => KeyAction::Msg(Msg::InputChanged(String::new())),
        KeyCode::Enter => KeyAction::Msg(Msg::Submitted),
        KeyCode::Backspace => {
            let mut text = current.to_string();
            if text.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Msg(Msg::InputChanged(text))
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut text = current.to_string();
            text.push(ch);
            KeyAction::Msg(Msg::InputChanged(text))
        }
        _ => KeyAction::Ignore,
    }
}

/// Append pasted text to the input; the field is single-line so line breaks are dropped.
pub fn map_paste(pasted: &str, current: &str) -> KeyAction {
    let cleaned: String = pasted.chars().filter(|ch| !matches!(ch, '\r' | '\n')).collect();
    if cleaned.is_empty() {
        return KeyAction::Ignore;
    }
    KeyAction::Msg(Msg::InputChanged(format!("{current}{cleaned}")))
}
