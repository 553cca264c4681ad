use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{Detail, DetailView};
use crate::format::{last_segment, or, timestamp, win_rate, yes_no};
use crate::types::{DailyPuzzle, Game, PlayerProfile, PlayerStats, TournamentRound};

pub fn render(frame: &mut Frame, view: &DetailView, area: Rect) {
    let lines = lines(&view.detail);

    let inner_height = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(inner_height);
    let scroll = (view.scroll as usize).min(max_scroll) as u16;

    frame.render_widget(Clear, area);

    let body = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(body, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("-- {} --", title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::raw(value.into()),
    ])
}

pub fn lines(detail: &Detail) -> Vec<Line<'static>> {
    match detail {
        Detail::Profile(profile) => profile_lines(profile),
        Detail::Stats { stats, .. } => stats_lines(stats),
        Detail::Puzzle(puzzle) => puzzle_lines(puzzle),
        Detail::Game(game) => game_lines(game),
        Detail::Round(round) => round_lines(round),
    }
}

fn profile_lines(profile: &PlayerProfile) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Username", or(&profile.username, "unknown")),
        field("Name", or(&profile.name, "not available")),
        field("Title", or(&profile.title, "no title")),
        field("Status", or(&profile.status, "not available")),
        field("League", or(&profile.league, "not available")),
        field("Location", or(&profile.location, "not available")),
        field("Followers", profile.followers.to_string()),
        field("Country", last_segment(or(&profile.country, "unknown"))),
        field("Last Online", timestamp(profile.last_online)),
        field("Joined", timestamp(profile.joined)),
        field("Is Streamer", yes_no(profile.is_streamer)),
    ];
    if let Some(twitch) = profile.twitch_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(field("Twitch URL", twitch));
    }
    lines.push(field("Profile URL", or(&profile.url, "not available")));
    lines
}

fn stats_lines(stats: &PlayerStats) -> Vec<Line<'static>> {
    let ladders = stats.ladders();
    let mut lines = vec![section("Chess Ratings")];
    for (name, ladder) in &ladders {
        let rating = ladder.and_then(|l| l.last.as_ref()).map_or(0, |r| r.rating);
        lines.push(field(&format!("{} Rating", name), rating.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(section("Best Ratings"));
    for (name, ladder) in &ladders {
        let best = ladder.and_then(|l| l.best.as_ref());
        let value = match best {
            Some(r) => format!("{} ({})", r.rating, timestamp(r.date)),
            None => "0 (unknown)".to_string(),
        };
        lines.push(field(&format!("Best {}", name), value));
    }

    lines.push(Line::from(""));
    lines.push(section("Records"));
    for (name, ladder) in &ladders {
        if let Some(record) = ladder.and_then(|l| l.record.as_ref()) {
            lines.push(field(
                name,
                format!(
                    "{}W / {}L / {}D ({:.1}% win rate)",
                    record.win,
                    record.loss,
                    record.draw,
                    win_rate(record.win, record.loss, record.draw)
                ),
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(section("Tactics"));
    if let Some(highest) = stats.tactics.as_ref().and_then(|t| t.highest.as_ref()) {
        lines.push(field(
            "Highest Tactics Rating",
            format!("{} ({})", highest.rating, timestamp(highest.date)),
        ));
    }

    lines.push(Line::from(""));
    lines.push(section("Puzzle Rush"));
    if let Some(best) = stats.puzzle_rush.as_ref().and_then(|p| p.best.as_ref()) {
        lines.push(field(
            "Best Score",
            format!("{} (from {} attempts)", best.score, best.total_attempts),
        ));
    }

    if let Some(fide) = stats.fide.filter(|f| *f > 0) {
        lines.push(Line::from(""));
        lines.push(field("FIDE", fide.to_string()));
    }
    lines
}

fn puzzle_lines(puzzle: &DailyPuzzle) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Title", or(&puzzle.title, "no puzzle available")),
        field("Puzzle URL", or(&puzzle.url, "not available")),
        field(
            "Publish Time",
            puzzle
                .publish_time
                .map_or_else(|| "not available".to_string(), timestamp),
        ),
        field("FEN", or(&puzzle.fen, "not available")),
        Line::from(""),
        section("PGN"),
    ];
    lines.extend(pgn_lines(&puzzle.pgn));
    lines
}

fn game_lines(game: &Game) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Date", timestamp(game.end_time)),
        field(
            "White",
            format!("{} ({})", game.white.username, game.white.rating),
        ),
        field(
            "Black",
            format!("{} ({})", game.black.username, game.black.rating),
        ),
        field("Result", game.score()),
        field("Time Control", or(&game.time_control, "unknown")),
        field("Time Class", or(&game.time_class, "unknown")),
        field("Rated", yes_no(game.rated)),
        field("Game URL", or(&game.url, "not available")),
        Line::from(""),
        section("PGN"),
    ];
    lines.extend(pgn_lines(&game.pgn));
    lines
}

fn round_lines(round: &TournamentRound) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Round", or(&round.name, "?")),
        field("URL", or(&round.url, "not available")),
        Line::from(""),
    ];
    if round.games.is_empty() {
        lines.push(Line::from("No games found for this round."));
        return lines;
    }
    lines.push(field("Games", round.games.len().to_string()));
    lines.extend(round.games.iter().zip(1..).map(|(game, n)| {
        Line::from(format!(
            "  Game {}: {} vs {} - Result: {}",
            n,
            last_segment(&game.white),
            last_segment(&game.black),
            or(&game.result, "*")
        ))
    }));
    lines
}

fn pgn_lines(pgn: &str) -> Vec<Line<'static>> {
    if pgn.trim().is_empty() {
        return vec![Line::from("not available")];
    }
    pgn.lines().map(|l| Line::from(format!("  {}", l))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChessStats, GamePlayer, Rating, Record, RoundGame};

    fn text(detail: &Detail) -> Vec<String> {
        lines(detail).iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn profile_country_is_code_and_zero_times_unknown() {
        let detail = Detail::Profile(Box::new(PlayerProfile {
            username: "erik".into(),
            country: "https://api.chess.com/pub/country/NO".into(),
            ..Default::default()
        }));
        let text = text(&detail);
        assert!(text.contains(&"Country: NO".to_string()));
        assert!(text.contains(&"Joined: unknown".to_string()));
        assert!(text.contains(&"Title: no title".to_string()));
        assert!(!text.iter().any(|l| l.starts_with("Twitch URL")));
    }

    #[test]
    fn stats_show_win_rate_to_one_decimal() {
        let detail = Detail::Stats {
            username: "erik".into(),
            stats: Box::new(PlayerStats {
                chess_blitz: Some(ChessStats {
                    last: Some(Rating {
                        rating: 2100,
                        ..Default::default()
                    }),
                    record: Some(Record {
                        win: 2,
                        loss: 1,
                        draw: 0,
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        };
        let text = text(&detail);
        assert!(text.contains(&"Blitz Rating: 2100".to_string()));
        assert!(text.contains(&"Bullet Rating: 0".to_string()));
        assert!(text.contains(&"Blitz: 2W / 1L / 0D (66.7% win rate)".to_string()));
    }

    #[test]
    fn game_detail_derives_result() {
        let detail = Detail::Game(Box::new(Game {
            end_time: 1_700_000_000,
            pgn: "[Event \"Live Chess\"]\n1. e4 e5".into(),
            white: GamePlayer {
                username: "alice".into(),
                result: "agreed".into(),
                ..Default::default()
            },
            black: GamePlayer {
                username: "bob".into(),
                result: "agreed".into(),
                ..Default::default()
            },
            ..Default::default()
        }));
        let text = text(&detail);
        assert!(text.contains(&"Date: 2023-11-14 22:13:20".to_string()));
        assert!(text.contains(&"Result: ½-½".to_string()));
        assert!(text.contains(&"  1. e4 e5".to_string()));
    }

    #[test]
    fn round_lists_games() {
        let detail = Detail::Round(Box::new(TournamentRound {
            name: "1".into(),
            games: vec![RoundGame {
                white: "https://api.chess.com/pub/player/alice".into(),
                black: "https://api.chess.com/pub/player/bob".into(),
                result: "1-0".into(),
                ..Default::default()
            }],
            ..Default::default()
        }));
        let text = text(&detail);
        assert!(text.contains(&"  Game 1: alice vs bob - Result: 1-0".to_string()));
    }
}
