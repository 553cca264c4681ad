mod detail;
mod list;
mod menu;
mod popup;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, View};
use crate::paging::Paging;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.view() {
        View::Menu(menu) => menu::render(frame, menu, chunks[1]),
        View::Prompt(prompt) => popup::render_prompt(frame, prompt),
        View::Detail(view) => detail::render(frame, view, chunks[1]),
        View::Archives { list, .. } => list::render(frame, list, chunks[1]),
        View::Games(list) => list::render(frame, list, chunks[1]),
        View::Leaderboard(list) => list::render(frame, list, chunks[1]),
        View::PlayerClubs(list) => list::render(frame, list, chunks[1]),
        View::Tournaments(list) => list::render(frame, list, chunks[1]),
        View::Rounds(list) => list::render(frame, list, chunks[1]),
        View::Standings(list) => list::render(frame, list, chunks[1]),
        View::Titled(list) => list::render(frame, list, chunks[1]),
        View::Members(list) => list::render(frame, list, chunks[1]),
    }

    if let Some(what) = &app.loading {
        popup::render_loading(frame, what);
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![Span::styled(
        format!("rook - {}", app.view().title()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(error) = &app.error {
        Line::from(vec![Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )])
    } else if let Some(notice) = &app.notice {
        Line::from(vec![Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Yellow),
        )])
    } else if app.loading.is_some() {
        Line::from(vec![Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )])
    } else if let Some(digits) = app.view().pending_selection() {
        Line::from(vec![
            Span::styled("Select: ", Style::default().fg(Color::Gray)),
            Span::styled(digits, Style::default().fg(Color::Yellow)),
            Span::styled("  (Enter to confirm, Esc to cancel)", Style::default().fg(Color::Gray)),
        ])
    } else {
        Line::from(vec![Span::styled(help(app.view()), Style::default().fg(Color::Gray))])
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

fn help(view: &View) -> &'static str {
    let paging = match view {
        View::Menu(_) => return "digits + Enter: choose | Esc: back | Ctrl+c: quit",
        View::Prompt(_) => return "Enter: submit | Esc: cancel",
        View::Detail(_) => return "j/k: scroll | o: open | y: copy url | v: pgn | q: back",
        View::Archives { list, .. } => list.paging,
        View::Games(list) => list.paging,
        View::Leaderboard(list) => list.paging,
        View::PlayerClubs(list) => list.paging,
        View::Tournaments(list) => list.paging,
        View::Rounds(list) => list.paging,
        View::Standings(list) => list.paging,
        View::Titled(list) => list.paging,
        View::Members(list) => list.paging,
    };
    match paging {
        Paging::Paged => "n/p: page | number + Enter: select | Esc: back",
        Paging::Chunked => "any key: more | Esc: back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, Loaded};
    use crate::config::PagingConfig;
    use crate::error::FetchError;
    use crate::types::Archive;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn main_menu_lists_choices() {
        let app = App::new(PagingConfig::default());
        let text = screen(&app);
        assert!(text.contains("rook - Chess.com API Client"));
        assert!(text.contains("1. View Player Profile"));
        assert!(text.contains("0. Exit"));
    }

    #[test]
    fn archive_page_shows_only_available_moves() {
        let mut app = App::new(PagingConfig::default());
        let urls = (1..=12)
            .map(|m| format!("https://api.chess.com/pub/player/erik/games/2023/{:02}", m))
            .collect();
        app.update(Action::Loaded(Ok(Loaded::Archives {
            username: "erik".into(),
            archives: Archive::newest_first(urls),
        })));
        let text = screen(&app);
        assert!(text.contains("1. Archive: 2023/12"));
        assert!(text.contains("10. Archive: 2023/03"));
        assert!(!text.contains("2023/02"));
        assert!(text.contains("Page 1/2"));
        assert!(text.contains("N - Next page"));
        assert!(!text.contains("P - Previous page"));
    }

    #[test]
    fn fetch_error_in_status_bar() {
        let mut app = App::new(PagingConfig::default());
        app.update(Action::Loaded(Err(FetchError::HttpStatus(404))));
        let text = screen(&app);
        assert!(text.contains("Error fetching data: server returned HTTP 404"));
    }
}
