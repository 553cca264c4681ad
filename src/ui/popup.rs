use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::Prompt;

/// Centered text entry for a username or identifier.
pub fn render_prompt(frame: &mut Frame, prompt: &Prompt) {
    let area = centered_rect(64, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(prompt.field.prompt())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}_", prompt.input),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default().borders(Borders::ALL).title(Span::styled(
            format!(" {} ", prompt.field.label()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    );

    frame.render_widget(popup, area);
}

pub fn render_loading(frame: &mut Frame, what: &str) {
    let area = centered_rect(50, 3, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(Line::from(Span::styled(
        format!("Fetching {}...", what),
        Style::default().fg(Color::Yellow),
    )))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);

    frame.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let popup_width = width.min(outer.width);
    let popup_height = height.min(outer.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((outer.height.saturating_sub(popup_height)) / 2),
            Constraint::Length(popup_height),
            Constraint::Min(0),
        ])
        .split(outer);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((outer.width.saturating_sub(popup_width)) / 2),
            Constraint::Length(popup_width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let outer = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(50, 4, outer), Rect::new(15, 10, 50, 4));
    }

    #[test]
    fn centered_rect_clamps_to_outer() {
        let outer = Rect::new(0, 0, 30, 5);
        assert_eq!(centered_rect(50, 7, outer), Rect::new(0, 0, 30, 5));
    }
}
