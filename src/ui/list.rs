use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::Browser;
use crate::format::{date, or, truncate};
use crate::paging::{PageView, Paging, Session};
use crate::types::{
    Archive, ClubMember, Game, LeaderboardPlayer, PlayerClub, Standing, Tournament,
    TournamentRound,
};

/// How one item of a paginated view is printed.
pub trait Row {
    /// Column header for tabular views.
    fn header() -> Option<String> {
        None
    }

    fn row(&self) -> String;
}

impl Row for Archive {
    fn row(&self) -> String {
        format!("Archive: {}", self)
    }
}

impl Row for Game {
    fn row(&self) -> String {
        format!(
            "{} - {} ({}) vs {} ({}) - {} - {}",
            date(self.end_time),
            self.white.username,
            self.white.rating,
            self.black.username,
            self.black.rating,
            self.score(),
            or(&self.time_class, "unknown"),
        )
    }
}

impl Row for LeaderboardPlayer {
    fn header() -> Option<String> {
        Some(format!(
            "{:>4} | {:>20} | {:>6} | {:>4}\n{}",
            "Rank",
            "Player",
            "Rating",
            "Title",
            "-".repeat(45)
        ))
    }

    fn row(&self) -> String {
        let name = if self.title.is_empty() {
            self.username.clone()
        } else {
            format!("{} {}", self.title, self.username)
        };
        format!(
            "{:>4} | {:>20} | {:>6} | {:>4}",
            self.rank,
            truncate(&name, 20),
            self.score,
            self.title
        )
    }
}

impl Row for Standing {
    fn header() -> Option<String> {
        Some(format!(
            "{:>4} | {:>20} | {:>6} | {:>5} | {:>3}-{:>3}-{:>3} | {:>5}\n{}",
            "Rank",
            "Player",
            "Points",
            "TB",
            "W",
            "L",
            "D",
            "Perf",
            "-".repeat(68)
        ))
    }

    fn row(&self) -> String {
        let name = or(&self.username, &self.player_id);
        format!(
            "{:>4} | {:>20} | {:>6} | {:>5} | {:>3}-{:>3}-{:>3} | {:>5}",
            self.rank,
            truncate(name, 20),
            self.points,
            self.tie_break,
            self.wins,
            self.losses,
            self.draws,
            self.performance
        )
    }
}

impl Row for PlayerClub {
    fn row(&self) -> String {
        format!("{} (joined {})", self.name, date(self.joined))
    }
}

impl Row for Tournament {
    fn row(&self) -> String {
        let status = or(&self.status, "unknown");
        format!("{} [{}]", or(&self.name, &self.url), status)
    }
}

impl Row for TournamentRound {
    fn row(&self) -> String {
        format!("Round {} - {} games", or(&self.name, "?"), self.games.len())
    }
}

impl Row for ClubMember {
    fn row(&self) -> String {
        format!("{} (joined {})", self.username, date(self.joined))
    }
}

impl Row for String {
    fn row(&self) -> String {
        self.clone()
    }
}

pub fn render<T: Row>(frame: &mut Frame, list: &Browser<T>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(list.title.as_str());

    let cursor = match &list.session {
        Session::Active(cursor) => cursor,
        Session::Empty | Session::Exited => {
            let hint = match list.paging {
                Paging::Paged => "Esc - Back",
                Paging::Chunked => "Press any key to go back",
            };
            let empty = Paragraph::new(vec![
                Line::from(format!("No {} found.", list.noun)),
                Line::from(""),
                Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
            ])
            .block(block)
            .style(Style::default().fg(Color::Gray));
            frame.render_widget(empty, area);
            return;
        }
    };

    let page = PageView::project(&list.items, cursor);
    let header = T::header();
    let header_height = header.as_ref().map_or(0, |h| h.lines().count() as u16);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(options_height(&page, list.paging)),
        ])
        .split(inner);

    let summary = Line::from(vec![Span::styled(
        format!(
            "Page {}/{} - {} {} total",
            page.page + 1,
            page.total_pages,
            page.count,
            list.noun
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]);
    frame.render_widget(Paragraph::new(summary), chunks[0]);

    if let Some(header) = header {
        let lines: Vec<Line> = header
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Gray))))
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    let items: Vec<ListItem> = page
        .entries
        .iter()
        .map(|(index, item)| {
            let text = match list.paging {
                Paging::Paged => format!("{}. {}", index, item.row()),
                Paging::Chunked => item.row(),
            };
            ListItem::new(Line::from(text))
        })
        .collect();
    frame.render_widget(List::new(items), chunks[2]);

    frame.render_widget(Paragraph::new(options(&page, list.paging)), chunks[3]);
}

fn options<T>(page: &PageView<'_, T>, paging: Paging) -> Vec<Line<'static>> {
    let key = Style::default().fg(Color::Yellow);
    match paging {
        Paging::Paged => {
            let mut lines = Vec::new();
            if page.has_previous {
                lines.push(Line::from(Span::styled("P - Previous page", key)));
            }
            if page.has_next {
                lines.push(Line::from(Span::styled("N - Next page", key)));
            }
            lines.push(Line::from(Span::styled("Number + Enter - Select item", key)));
            lines.push(Line::from(Span::styled("Esc - Back", key)));
            lines
        }
        Paging::Chunked if page.has_next => vec![Line::from(Span::styled(
            "Press any key to see more, Esc to go back",
            key,
        ))],
        Paging::Chunked => vec![Line::from(Span::styled("Press any key to go back", key))],
    }
}

fn options_height<T>(page: &PageView<'_, T>, paging: Paging) -> u16 {
    options(page, paging).len() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GamePlayer;

    #[test]
    fn leaderboard_row_is_aligned() {
        let player = LeaderboardPlayer {
            username: "Hikaru".into(),
            rank: 1,
            score: 3250,
            title: "GM".into(),
            ..Default::default()
        };
        assert_eq!(player.row(), "   1 |            GM Hikaru |   3250 |   GM");
        let header = LeaderboardPlayer::header().unwrap();
        assert!(header.starts_with("Rank | "));
        assert!(header.ends_with(&"-".repeat(45)));
    }

    #[test]
    fn standing_falls_back_to_player_id() {
        let standing = Standing {
            rank: 3,
            player_id: "p-77".into(),
            points: 4.5,
            tie_break: 12.25,
            wins: 4,
            losses: 1,
            draws: 1,
            performance: 2210,
            ..Default::default()
        };
        let header = Standing::header().unwrap();
        assert!(header.contains("| Points |    TB |"));
        assert!(header.ends_with(&"-".repeat(68)));
        assert_eq!(
            standing.row(),
            "   3 |                 p-77 |    4.5 | 12.25 |   4-  1-  1 |  2210"
        );
    }

    #[test]
    fn game_row_shows_players_and_result() {
        let game = Game {
            end_time: 1_700_000_000,
            time_class: "blitz".into(),
            white: GamePlayer {
                username: "alice".into(),
                rating: 1500,
                result: "win".into(),
                ..Default::default()
            },
            black: GamePlayer {
                username: "bob".into(),
                rating: 1480,
                result: "checkmated".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            game.row(),
            "2023-11-14 - alice (1500) vs bob (1480) - 1-0 - blitz"
        );
    }
}
