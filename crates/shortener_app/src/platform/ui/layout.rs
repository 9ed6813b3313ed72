use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::BUTTON_SHORTEN;

/// Screen regions of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    pub input: Rect,
    pub button: Rect,
    pub hint: Rect,
    pub result: Rect,
    pub help: Rect,
}

pub fn form_layout(area: Rect) -> FormLayout {
    let [title, input_row, hint, result, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let button_width = BUTTON_SHORTEN.len() as u16 + 2;
    let [input, button] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(button_width)])
            .areas(input_row);

    FormLayout {
        title,
        input,
        button,
        hint,
        result,
        help,
    }
}
