use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{Menu, MenuView};
use crate::format::{last_segment, or, timestamp, yes_no};
use crate::types::{ClubProfile, Tournament};

pub fn render(frame: &mut Frame, view: &MenuView, area: Rect) {
    let info = match &view.menu {
        Menu::Club { id, club } => club_lines(id, club),
        Menu::Tournament { id, tournament } => tournament_lines(id, tournament),
        _ => Vec::new(),
    };
    let options = view.menu.options();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(if info.is_empty() { 0 } else { 3 }),
            Constraint::Length(options.len() as u16 + 2),
            Constraint::Length(3),
        ])
        .split(area);

    if !info.is_empty() {
        let details = Paragraph::new(info)
            .block(Block::default().borders(Borders::ALL).title("Details"))
            .wrap(Wrap { trim: false });
        frame.render_widget(details, chunks[0]);
    }

    let lines: Vec<Line> = options
        .iter()
        .map(|(n, label)| {
            Line::from(vec![
                Span::styled(format!("{}. ", n), Style::default().fg(Color::Yellow)),
                Span::raw(label.as_str()),
            ])
        })
        .collect();
    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view.menu.title()),
    );
    frame.render_widget(menu, chunks[1]);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("Enter your choice: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}_", view.input),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, chunks[2]);
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::raw(value.into()),
    ])
}

fn club_lines(id: &str, club: &ClubProfile) -> Vec<Line<'static>> {
    let admins = club
        .admin
        .iter()
        .map(|url| last_segment(url))
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines = vec![
        field("ID", or(&club.id, id)),
        field("Created", timestamp(club.created)),
        field("Last activity", timestamp(club.last_activity)),
        field("Members", club.members_count.to_string()),
        field("Average daily rating", club.average_daily_rating.to_string()),
        field("Country", last_segment(or(&club.country, "unknown"))),
        field("Visibility", or(&club.visibility, "unknown")),
        field("Join request", or(&club.join_request, "unknown")),
        field("URL", club.url.as_str()),
        field("Administrators", or(&admins, "none")),
    ];
    if !club.description.trim().is_empty() {
        lines.push(Line::from(""));
        lines.extend(
            club.description
                .lines()
                .map(|l| Line::from(l.trim().to_string())),
        );
    }
    lines
}

fn tournament_lines(id: &str, tournament: &Tournament) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("ID", id),
        field("Status", or(&tournament.status, "unknown")),
        field("Start", timestamp(tournament.start_time)),
        field("End", timestamp(tournament.end_time)),
        field("URL", tournament.url.as_str()),
    ];
    if let Some(settings) = &tournament.settings {
        lines.push(field("Type", or(&settings.kind, "unknown")));
        lines.push(field(
            "Time",
            format!(
                "{} ({})",
                or(&settings.time_control, "?"),
                or(&settings.time_class, "?")
            ),
        ));
        lines.push(field("Variant", or(&settings.variant, "chess")));
        lines.push(field("Rated", yes_no(settings.rated)));
    }
    lines
}
