use ratatui::layout::{Alignment, Position};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use shortener_core::{FormViewModel, ResultView};

use super::constants::*;
use super::layout::form_layout;

pub fn render(frame: &mut Frame, view: &FormViewModel) {
    let layout = form_layout(frame.area());

    frame.render_widget(
        Paragraph::new(TITLE.bold()).alignment(Alignment::Center),
        layout.title,
    );

    // Keep the caret visible on long input by showing only the tail that fits.
    let inner_width = layout.input.width.saturating_sub(2);
    let visible = usize::from(inner_width.saturating_sub(1));
    let input_len = view.input.chars().count();
    let skipped = input_len.saturating_sub(visible);
    let input_text = if view.input.is_empty() {
        Line::from(INPUT_PLACEHOLDER.dark_gray())
    } else {
        Line::from(view.input.chars().skip(skipped).collect::<String>())
    };
    frame.render_widget(
        Paragraph::new(input_text).block(Block::default().borders(Borders::ALL)),
        layout.input,
    );
    let caret = u16::try_from(input_len - skipped).unwrap_or(inner_width);
    frame.set_cursor_position(Position::new(
        layout.input.x.saturating_add(1).saturating_add(caret),
        layout.input.y.saturating_add(1),
    ));

    frame.render_widget(
        Paragraph::new(BUTTON_SHORTEN.bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        layout.button,
    );

    if let Some(hint) = view.input_hint {
        frame.render_widget(
            Paragraph::new(hint.message().fg(Color::Yellow)),
            layout.hint,
        );
    }

    frame.render_widget(
        Paragraph::new(result_lines(view)).wrap(Wrap { trim: false }),
        layout.result,
    );

    frame.render_widget(Paragraph::new(HELP_TEXT.dark_gray()), layout.help);
}

fn result_lines(view: &FormViewModel) -> Vec<Line<'_>> {
    if view.pending {
        return vec![Line::from(PENDING_LABEL.italic())];
    }

    match &view.result {
        None => Vec::new(),
        Some(ResultView::Link { text, href }) => {
            let link_style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED);
            let mut lines = vec![
                Line::from(RESULT_LABEL),
                Line::from(Span::styled(text.as_str(), link_style)),
            ];
            if href != text {
                lines.push(Line::from(Span::styled(
                    format!("-> {href}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
        Some(ResultView::Message(message)) => {
            vec![Line::from(message.as_str().fg(Color::Red))]
        }
    }
}
