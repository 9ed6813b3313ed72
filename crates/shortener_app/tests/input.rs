use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shortener_app::{map_key, map_paste, KeyAction};
use shortener_core::Msg;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

#[test]
fn typing_appends_to_current_input() {
    assert_eq!(
        map_key(press(KeyCode::Char('m')), "https://exa"),
        KeyAction::Msg(Msg::InputChanged("https://exam".to_string()))
    );
}

#[test]
fn backspace_removes_last_char() {
    assert_eq!(
        map_key(press(KeyCode::Backspace), "https://é"),
        KeyAction::Msg(Msg::InputChanged("https://".to_string()))
    );
    assert_eq!(map_key(press(KeyCode::Backspace), ""), KeyAction::Ignore);
}

#[test]
fn enter_submits_and_escape_quits() {
    assert_eq!(
        map_key(press(KeyCode::Enter), "https://example.com"),
        KeyAction::Msg(Msg::Submitted)
    );
    assert_eq!(map_key(press(KeyCode::Esc), ""), KeyAction::Quit);
    assert_eq!(map_key(ctrl('c'), "x"), KeyAction::Quit);
}

#[test]
fn ctrl_u_clears_the_field() {
    assert_eq!(
        map_key(ctrl('u'), "https://example.com"),
        KeyAction::Msg(Msg::InputChanged(String::new()))
    );
}

#[test]
fn key_release_is_ignored() {
    let mut key = press(KeyCode::Char('a'));
    key.kind = KeyEventKind::Release;
    assert_eq!(map_key(key, ""), KeyAction::Ignore);
}

#[test]
fn paste_strips_line_breaks() {
    assert_eq!(
        map_paste("example.com/path\r\n", "https://"),
        KeyAction::Msg(Msg::InputChanged("https://example.com/path".to_string()))
    );
    assert_eq!(map_paste("\n", "https://"), KeyAction::Ignore);
}
