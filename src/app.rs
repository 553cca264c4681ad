use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::action::{Action, Effect, Load, Loaded};
use crate::catalog::Title;
use crate::config::PagingConfig;
use crate::error::{NavigationError, PromptError};
use crate::event::Event;
use crate::format::last_segment;
use crate::paging::{KeyInput, KeyOutcome, Paging, Session};
use crate::types::{
    Archive, ClubMember, ClubProfile, DailyPuzzle, Game, LeaderboardCategory,
    LeaderboardPlayer, Leaderboards, PlayerClub, PlayerProfile, PlayerStats, Standing,
    Tournament, TournamentRound,
};

#[derive(Debug, Clone)]
pub enum Menu {
    Main,
    Player {
        username: String,
    },
    Titles,
    Leaderboards(Box<Leaderboards>),
    Club {
        id: String,
        club: Box<ClubProfile>,
    },
    Tournament {
        id: String,
        tournament: Box<Tournament>,
    },
}

impl Menu {
    pub fn title(&self) -> String {
        match self {
            Menu::Main => "Chess.com API Client".to_string(),
            Menu::Player { username } => format!("Information for {}", username),
            Menu::Titles => "Titled Players".to_string(),
            Menu::Leaderboards(_) => "Leaderboards".to_string(),
            Menu::Club { club, .. } => format!("Club: {}", club.name),
            Menu::Tournament { tournament, .. } => format!("Tournament: {}", tournament.name),
        }
    }

    pub fn options(&self) -> Vec<(u32, String)> {
        match self {
            Menu::Main => vec![
                (1, "View Player Profile".into()),
                (2, "View Daily Puzzle".into()),
                (3, "Get Titled Players".into()),
                (4, "View Chess.com Leaderboards".into()),
                (5, "View Club Information".into()),
                (6, "View Tournament Details".into()),
                (0, "Exit".into()),
            ],
            Menu::Player { .. } => vec![
                (1, "Basic Profile".into()),
                (2, "Game Statistics".into()),
                (3, "Recent Games".into()),
                (4, "Game Archives".into()),
                (5, "Club Memberships".into()),
                (0, "Back to Main Menu".into()),
            ],
            Menu::Titles => Title::ALL
                .iter()
                .zip(1..)
                .map(|(title, n)| (n, format!("{:<3} ({})", title.as_api_str(), title)))
                .chain(std::iter::once((0, "Back".to_string())))
                .collect(),
            Menu::Leaderboards(_) => LeaderboardCategory::ALL
                .iter()
                .zip(1..)
                .map(|(category, n)| (n, category.to_string()))
                .chain(std::iter::once((0, "Back".to_string())))
                .collect(),
            Menu::Club { .. } => vec![
                (1, "View Club Members".into()),
                (2, "View Club Tournaments".into()),
                (0, "Back".into()),
            ],
            Menu::Tournament { .. } => vec![
                (1, "View Tournament Rounds".into()),
                (2, "View Tournament Standings".into()),
                (0, "Back".into()),
            ],
        }
    }

    fn choose(&self, choice: u32, paging: &PagingConfig) -> Action {
        match (self, choice) {
            (Menu::Main, 0) => Action::Quit,
            (_, 0) => Action::Back,
            (Menu::Main, 1) => push(View::Prompt(Prompt::new(Field::Username))),
            (Menu::Main, 2) => Action::Load(Load::Puzzle),
            (Menu::Main, 3) => push(View::Menu(MenuView::new(Menu::Titles))),
            (Menu::Main, 4) => Action::Load(Load::Leaderboards),
            (Menu::Main, 5) => push(View::Prompt(Prompt::new(Field::ClubId))),
            (Menu::Main, 6) => push(View::Prompt(Prompt::new(Field::TournamentId))),
            (Menu::Player { username }, n) => {
                let username = username.clone();
                match n {
                    1 => Action::Load(Load::Profile(username)),
                    2 => Action::Load(Load::Stats(username)),
                    3 => {
                        let now = chrono::Local::now();
                        Action::Load(Load::MonthGames {
                            username,
                            year: now.year(),
                            month: now.month(),
                        })
                    }
                    4 => Action::Load(Load::Archives(username)),
                    5 => Action::Load(Load::PlayerClubs(username)),
                    _ => invalid_choice(),
                }
            }
            (Menu::Titles, n) => match Title::ALL.get(n as usize - 1) {
                Some(title) => Action::Load(Load::Titled(*title)),
                None => invalid_choice(),
            },
            (Menu::Leaderboards(boards), n) => match LeaderboardCategory::ALL.get(n as usize - 1)
            {
                Some(category) => push(View::Leaderboard(Browser::new(
                    format!("{} Leaderboard", category),
                    "players",
                    category.entries(boards).to_vec(),
                    paging.leaderboard,
                    Paging::Paged,
                ))),
                None => invalid_choice(),
            },
            (Menu::Club { id, club }, 1) => Action::Load(Load::ClubMembers {
                id: id.clone(),
                name: club.name.clone(),
            }),
            (Menu::Club { id, club }, 2) => Action::Load(Load::ClubTournaments {
                id: id.clone(),
                name: club.name.clone(),
            }),
            (Menu::Tournament { id, tournament }, 1) => Action::Load(Load::Rounds {
                id: id.clone(),
                name: tournament.name.clone(),
            }),
            (Menu::Tournament { id, tournament }, 2) => Action::Load(Load::Standings {
                id: id.clone(),
                name: tournament.name.clone(),
            }),
            _ => invalid_choice(),
        }
    }
}

fn push(view: View) -> Action {
    Action::Push(Box::new(view))
}

fn invalid_choice() -> Action {
    Action::Notice("Invalid choice".to_string())
}

/// A numbered menu with a typed, Enter-terminated choice.
#[derive(Debug, Clone)]
pub struct MenuView {
    pub menu: Menu,
    pub input: String,
}

impl MenuView {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            input: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    ClubId,
    TournamentId,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::ClubId => "Club ID",
            Field::TournamentId => "Tournament ID",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Username => "Enter Chess.com username",
            Field::ClubId => "Enter club URL ID (e.g. 'chess-com-developer-community')",
            Field::TournamentId => "Enter tournament ID/URL name (e.g. 'rapid-chess-league')",
        }
    }
}

/// Free-text entry for a username or identifier.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub field: Field,
    pub input: String,
}

impl Prompt {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            input: String::new(),
        }
    }

    fn submit(&self) -> Action {
        let value = self.input.trim().to_string();
        if value.is_empty() {
            return Action::Notice(PromptError::EmptyInput(self.field.label()).to_string());
        }
        match self.field {
            Field::Username => push(View::Menu(MenuView::new(Menu::Player { username: value }))),
            Field::ClubId => Action::Load(Load::Club(value)),
            Field::TournamentId => Action::Load(Load::Tournament(value)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Detail {
    Profile(Box<PlayerProfile>),
    Stats {
        username: String,
        stats: Box<PlayerStats>,
    },
    Puzzle(Box<DailyPuzzle>),
    Game(Box<Game>),
    Round(Box<TournamentRound>),
}

impl Detail {
    pub fn url(&self) -> Option<&str> {
        let url = match self {
            Detail::Profile(profile) => profile.url.as_str(),
            Detail::Stats { .. } => return None,
            Detail::Puzzle(puzzle) => puzzle.url.as_str(),
            Detail::Game(game) => game.url.as_str(),
            Detail::Round(round) => round.url.as_str(),
        };
        (!url.is_empty()).then_some(url)
    }

    pub fn pgn(&self) -> Option<&str> {
        let pgn = match self {
            Detail::Puzzle(puzzle) => puzzle.pgn.as_str(),
            Detail::Game(game) => game.pgn.as_str(),
            _ => return None,
        };
        (!pgn.is_empty()).then_some(pgn)
    }
}

#[derive(Debug, Clone)]
pub struct DetailView {
    pub detail: Detail,
    pub scroll: u16,
}

impl DetailView {
    pub fn new(detail: Detail) -> Self {
        Self { detail, scroll: 0 }
    }
}

/// One paginated browsing session over an owned collection.
#[derive(Debug, Clone)]
pub struct Browser<T> {
    pub title: String,
    pub noun: &'static str,
    pub items: Vec<T>,
    pub session: Session,
    pub input: KeyInput,
    pub paging: Paging,
}

impl<T> Browser<T> {
    pub fn new(
        title: String,
        noun: &'static str,
        items: Vec<T>,
        page_size: usize,
        paging: Paging,
    ) -> Self {
        let session = Session::new(items.len(), page_size);
        Self {
            title,
            noun,
            items,
            session,
            input: KeyInput::default(),
            paging,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Browse {
        match self.input.interpret(key, &self.session, self.paging) {
            KeyOutcome::Command(command) => match self.session.apply(command) {
                Ok(step) => {
                    self.session = step.session;
                    if step.session.is_exited() {
                        Browse::Exit
                    } else if let Some(index) = step.selected {
                        Browse::Select(index)
                    } else {
                        Browse::Stay
                    }
                }
                Err(e) => Browse::Invalid(e),
            },
            KeyOutcome::Rejected(e) => Browse::Invalid(e),
            KeyOutcome::Pending | KeyOutcome::Ignored => Browse::Stay,
        }
    }
}

enum Browse {
    Stay,
    Exit,
    Select(usize),
    Invalid(NavigationError),
}

impl Browse {
    fn then(self, on_select: impl FnOnce(usize) -> Action) -> Action {
        match self {
            Browse::Stay => Action::None,
            Browse::Exit => Action::Back,
            Browse::Select(index) => on_select(index),
            Browse::Invalid(e) => Action::Notice(e.to_string()),
        }
    }
}

/// One entry of the navigation stack.
#[derive(Debug, Clone)]
pub enum View {
    Menu(MenuView),
    Prompt(Prompt),
    Detail(DetailView),
    Archives {
        username: String,
        list: Browser<Archive>,
    },
    Games(Browser<Game>),
    Leaderboard(Browser<LeaderboardPlayer>),
    PlayerClubs(Browser<PlayerClub>),
    Tournaments(Browser<Tournament>),
    Rounds(Browser<TournamentRound>),
    Standings(Browser<Standing>),
    Titled(Browser<String>),
    Members(Browser<ClubMember>),
}

impl View {
    pub fn title(&self) -> String {
        match self {
            View::Menu(menu) => menu.menu.title(),
            View::Prompt(prompt) => prompt.field.label().to_string(),
            View::Detail(view) => match &view.detail {
                Detail::Profile(profile) => format!("Profile of {}", profile.username),
                Detail::Stats { username, .. } => format!("Stats of {}", username),
                Detail::Puzzle(_) => "Daily Puzzle".to_string(),
                Detail::Game(_) => "Game Details".to_string(),
                Detail::Round(round) => format!("Round {}", round.name),
            },
            View::Archives { list, .. } => list.title.clone(),
            View::Games(list) => list.title.clone(),
            View::Leaderboard(list) => list.title.clone(),
            View::PlayerClubs(list) => list.title.clone(),
            View::Tournaments(list) => list.title.clone(),
            View::Rounds(list) => list.title.clone(),
            View::Standings(list) => list.title.clone(),
            View::Titled(list) => list.title.clone(),
            View::Members(list) => list.title.clone(),
        }
    }

    /// Digits typed so far in a list selection.
    pub fn pending_selection(&self) -> Option<&str> {
        match self {
            View::Archives { list, .. } => list.input.pending(),
            View::Games(list) => list.input.pending(),
            View::Leaderboard(list) => list.input.pending(),
            View::PlayerClubs(list) => list.input.pending(),
            View::Tournaments(list) => list.input.pending(),
            View::Rounds(list) => list.input.pending(),
            View::Standings(list) => list.input.pending(),
            View::Titled(list) => list.input.pending(),
            View::Members(list) => list.input.pending(),
            View::Menu(_) | View::Prompt(_) | View::Detail(_) => None,
        }
    }
}

/// Url id of a club or tournament: the last segment of its API id, or of its web URL.
fn url_id(api_id: &str, url: &str) -> String {
    let source = if api_id.is_empty() { url } else { api_id };
    last_segment(source).to_string()
}

pub struct App {
    root: View,
    stack: Vec<View>,
    pub paging: PagingConfig,
    pub loading: Option<String>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(paging: PagingConfig) -> Self {
        Self {
            root: View::Menu(MenuView::new(Menu::Main)),
            stack: Vec::new(),
            paging,
            loading: None,
            error: None,
            notice: None,
            should_quit: false,
        }
    }

    /// The view on top of the navigation stack.
    pub fn view(&self) -> &View {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Number of views on the stack, counting the main menu.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn handle_event(&mut self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Render => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        self.error = None;
        self.notice = None;

        let paging = self.paging;
        let view = match self.stack.last_mut() {
            Some(view) => view,
            None => &mut self.root,
        };

        match view {
            View::Menu(menu) => match key.code {
                KeyCode::Enter => {
                    let choice = menu.input.trim().parse::<u32>();
                    menu.input.clear();
                    match choice {
                        Ok(n) => menu.menu.choose(n, &paging),
                        Err(_) => invalid_choice(),
                    }
                }
                KeyCode::Backspace => {
                    menu.input.pop();
                    Action::None
                }
                KeyCode::Esc => match menu.menu {
                    Menu::Main => Action::None,
                    _ => Action::Back,
                },
                KeyCode::Char(c) => {
                    menu.input.push(c);
                    Action::None
                }
                _ => Action::None,
            },
            View::Prompt(prompt) => match key.code {
                KeyCode::Enter => prompt.submit(),
                KeyCode::Backspace => {
                    prompt.input.pop();
                    Action::None
                }
                KeyCode::Esc => Action::Back,
                KeyCode::Char(c) => {
                    prompt.input.push(c);
                    Action::None
                }
                _ => Action::None,
            },
            View::Detail(view) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                    Action::Back
                }
                KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
                KeyCode::Char('o') => match view.detail.url() {
                    Some(url) => Action::OpenInBrowser(url.to_string()),
                    None => Action::None,
                },
                KeyCode::Char('y') => match view.detail.url() {
                    Some(url) => Action::YankUrl(url.to_string()),
                    None => Action::None,
                },
                KeyCode::Char('v') => match view.detail.pgn() {
                    Some(pgn) => Action::ViewPgn(pgn.to_string()),
                    None => Action::None,
                },
                _ => Action::None,
            },
            View::Archives { username, list } => list.handle_key(key).then(|i| {
                Action::Load(Load::ArchiveGames {
                    username: username.clone(),
                    archive: list.items[i].clone(),
                })
            }),
            View::Games(list) => list
                .handle_key(key)
                .then(|i| push(View::Detail(DetailView::new(Detail::Game(Box::new(
                    list.items[i].clone(),
                )))))),
            View::Leaderboard(list) => list
                .handle_key(key)
                .then(|i| Action::Load(Load::Profile(list.items[i].username.clone()))),
            View::PlayerClubs(list) => list.handle_key(key).then(|i| {
                let club = &list.items[i];
                Action::Load(Load::Club(url_id(&club.id, &club.url)))
            }),
            View::Tournaments(list) => list.handle_key(key).then(|i| {
                let tournament = &list.items[i];
                Action::Load(Load::Tournament(url_id(&tournament.id, &tournament.url)))
            }),
            View::Rounds(list) => list
                .handle_key(key)
                .then(|i| push(View::Detail(DetailView::new(Detail::Round(Box::new(
                    list.items[i].clone(),
                )))))),
            View::Standings(list) => list.handle_key(key).then(|_| Action::None),
            View::Titled(list) => list.handle_key(key).then(|_| Action::None),
            View::Members(list) => list.handle_key(key).then(|_| Action::None),
        }
    }

    pub fn update(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => self.pop(),
            Action::Push(view) => self.push(*view),
            Action::Load(load) => {
                self.loading = Some(load.describe());
                return Some(Effect::Fetch(load));
            }
            Action::Loaded(Ok(loaded)) => {
                self.loading = None;
                let view = self.view_for(loaded);
                self.push(view);
            }
            Action::Loaded(Err(err)) => {
                self.loading = None;
                return self.update(Action::from(err));
            }
            Action::ScrollUp => {
                if let Some(View::Detail(view)) = self.stack.last_mut() {
                    view.scroll = view.scroll.saturating_sub(1);
                }
            }
            Action::ScrollDown => {
                if let Some(View::Detail(view)) = self.stack.last_mut() {
                    view.scroll = view.scroll.saturating_add(1);
                }
            }
            Action::ViewPgn(pgn) => return Some(Effect::Pager(pgn)),
            Action::OpenInBrowser(url) => return Some(Effect::OpenInBrowser(url)),
            Action::YankUrl(url) => return Some(Effect::YankUrl(url)),
            Action::Notice(msg) => {
                self.notice = Some(msg);
            }
            Action::Error(msg) => {
                self.error = Some(msg);
            }
            Action::None => {}
        }
        None
    }

    fn push(&mut self, view: View) {
        // A prompt is replaced by whatever it leads to.
        if matches!(self.stack.last(), Some(View::Prompt(_))) {
            self.stack.pop();
        }
        self.stack.push(view);
        debug!(view = %self.view().title(), depth = self.depth(), "push view");
    }

    fn pop(&mut self) {
        if let Some(view) = self.stack.pop() {
            debug!(view = %view.title(), depth = self.depth(), "pop view");
        }
    }

    fn view_for(&self, loaded: Loaded) -> View {
        let paging = self.paging;
        match loaded {
            Loaded::Profile(profile) => View::Detail(DetailView::new(Detail::Profile(profile))),
            Loaded::Stats { username, stats } => {
                View::Detail(DetailView::new(Detail::Stats { username, stats }))
            }
            Loaded::Puzzle(puzzle) => View::Detail(DetailView::new(Detail::Puzzle(puzzle))),
            Loaded::Games { title, games } => View::Games(Browser::new(
                title,
                "games",
                games,
                paging.games,
                Paging::Paged,
            )),
            Loaded::Archives { username, archives } => View::Archives {
                list: Browser::new(
                    format!("Game Archives for {}", username),
                    "archives",
                    archives,
                    paging.archives,
                    Paging::Paged,
                ),
                username,
            },
            Loaded::PlayerClubs { username, clubs } => View::PlayerClubs(Browser::new(
                format!("Clubs for {}", username),
                "clubs",
                clubs,
                paging.lists,
                Paging::Paged,
            )),
            Loaded::Titled { title, players } => View::Titled(Browser::new(
                format!("{} Players", title.as_api_str()),
                "players",
                players,
                paging.chunk,
                Paging::Chunked,
            )),
            Loaded::Leaderboards(boards) => View::Menu(MenuView::new(Menu::Leaderboards(boards))),
            Loaded::Club { id, club } => View::Menu(MenuView::new(Menu::Club { id, club })),
            Loaded::ClubMembers { name, members } => View::Members(Browser::new(
                format!("Members of {}", name),
                "members",
                members,
                paging.chunk,
                Paging::Chunked,
            )),
            Loaded::ClubTournaments { name, tournaments } => View::Tournaments(Browser::new(
                format!("Tournaments of {}", name),
                "tournaments",
                tournaments,
                paging.lists,
                Paging::Paged,
            )),
            Loaded::Tournament { id, tournament } => {
                View::Menu(MenuView::new(Menu::Tournament { id, tournament }))
            }
            Loaded::Rounds { name, rounds } => View::Rounds(Browser::new(
                format!("Rounds of {}", name),
                "rounds",
                rounds,
                paging.lists,
                Paging::Paged,
            )),
            Loaded::Standings { name, standings } => View::Standings(Browser::new(
                format!("Standings of {}", name),
                "standings",
                standings,
                paging.chunk,
                Paging::Chunked,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through the same two steps the main loop uses.
    fn press(app: &mut App, code: KeyCode) -> Option<Effect> {
        let action = app.handle_event(Event::Key(key(code)));
        app.update(action)
    }

    fn type_line(app: &mut App, text: &str) -> Option<Effect> {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter)
    }

    fn archive_urls(n: usize) -> Vec<Archive> {
        let urls = (1..=n)
            .map(|i| {
                format!(
                    "https://api.chess.com/pub/player/erik/games/{}/{:02}",
                    2000 + (i - 1) / 12,
                    (i - 1) % 12 + 1
                )
            })
            .collect();
        Archive::newest_first(urls)
    }

    fn app_with_archives(n: usize) -> App {
        let mut app = App::new(PagingConfig::default());
        type_line(&mut app, "1");
        type_line(&mut app, "erik");
        app.update(Action::Loaded(Ok(Loaded::Archives {
            username: "erik".to_string(),
            archives: archive_urls(n),
        })));
        app
    }

    fn archive_page(app: &App) -> usize {
        match app.view() {
            View::Archives { list, .. } => list.session.cursor().unwrap().current_page(),
            other => panic!("expected archives, got {}", other.title()),
        }
    }

    #[test]
    fn starts_at_main_menu() {
        let app = App::new(PagingConfig::default());
        assert!(matches!(app.view(), View::Menu(MenuView { menu: Menu::Main, .. })));
        assert_eq!(app.depth(), 1);
    }

    #[test]
    fn quit_from_main_menu() {
        let mut app = App::new(PagingConfig::default());
        type_line(&mut app, "0");
        assert!(app.should_quit);
    }

    #[test]
    fn invalid_menu_choice_is_a_notice() {
        let mut app = App::new(PagingConfig::default());
        type_line(&mut app, "9");
        assert_eq!(app.notice.as_deref(), Some("Invalid choice"));
        type_line(&mut app, "abc");
        assert_eq!(app.notice.as_deref(), Some("Invalid choice"));
        assert_eq!(app.depth(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn escape_on_main_menu_does_nothing() {
        let mut app = App::new(PagingConfig::default());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.depth(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn empty_username_is_rejected() {
        let mut app = App::new(PagingConfig::default());
        type_line(&mut app, "1");
        type_line(&mut app, "   ");
        assert_eq!(app.notice.as_deref(), Some("Username cannot be empty"));
        assert!(matches!(app.view(), View::Prompt(_)));
    }

    #[test]
    fn username_opens_player_menu_replacing_prompt() {
        let mut app = App::new(PagingConfig::default());
        type_line(&mut app, "1");
        type_line(&mut app, "hikaru");
        assert_eq!(app.depth(), 2);
        assert_eq!(app.view().title(), "Information for hikaru");
    }

    #[test]
    fn player_menu_requests_fetches() {
        let mut app = App::new(PagingConfig::default());
        type_line(&mut app, "1");
        type_line(&mut app, "hikaru");
        assert_eq!(
            type_line(&mut app, "4"),
            Some(Effect::Fetch(Load::Archives("hikaru".into())))
        );
        assert!(app.loading.is_some());
        assert_eq!(
            type_line(&mut app, "1"),
            Some(Effect::Fetch(Load::Profile("hikaru".into())))
        );
    }

    #[test]
    fn club_prompt_fetches_then_replaces_prompt() {
        let mut app = App::new(PagingConfig::default());
        type_line(&mut app, "5");
        let effect = type_line(&mut app, "chess-com-developer-community");
        assert_eq!(
            effect,
            Some(Effect::Fetch(Load::Club("chess-com-developer-community".into())))
        );
        app.update(Action::Loaded(Ok(Loaded::Club {
            id: "chess-com-developer-community".into(),
            club: Box::new(ClubProfile {
                name: "Developers".into(),
                ..Default::default()
            }),
        })));
        assert_eq!(app.depth(), 2);
        assert_eq!(app.view().title(), "Club: Developers");
        assert_eq!(
            type_line(&mut app, "1"),
            Some(Effect::Fetch(Load::ClubMembers {
                id: "chess-com-developer-community".into(),
                name: "Developers".into()
            }))
        );
    }

    #[test]
    fn archive_pages_and_selection() {
        let mut app = app_with_archives(23);
        assert_eq!(archive_page(&app), 0);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(archive_page(&app), 2);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(archive_page(&app), 2);

        // newest first: display index 1 is the most recent month
        let effect = type_line(&mut app, "1");
        match effect {
            Some(Effect::Fetch(Load::ArchiveGames { username, archive })) => {
                assert_eq!(username, "erik");
                assert_eq!(archive.to_string(), "2001/11");
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn out_of_range_selection_stays_on_page() {
        let mut app = app_with_archives(23);
        press(&mut app, KeyCode::Char('n'));
        let depth = app.depth();
        assert_eq!(type_line(&mut app, "24"), None);
        assert!(app.notice.as_deref().unwrap().contains("24"));
        assert_eq!(archive_page(&app), 1);
        assert_eq!(app.depth(), depth);
    }

    #[test]
    fn http_404_is_reported_and_cursor_untouched() {
        let mut app = app_with_archives(23);
        press(&mut app, KeyCode::Char('n'));
        let depth = app.depth();

        let effect = type_line(&mut app, "3");
        assert!(matches!(effect, Some(Effect::Fetch(Load::ArchiveGames { .. }))));
        app.update(Action::Loaded(Err(FetchError::HttpStatus(404))));

        assert!(app.error.as_deref().unwrap().contains("404"));
        assert!(app.loading.is_none());
        assert_eq!(app.depth(), depth);
        assert_eq!(archive_page(&app), 1);

        // the error clears on the next key
        press(&mut app, KeyCode::Char('p'));
        assert!(app.error.is_none());
        assert_eq!(archive_page(&app), 0);
    }

    #[test]
    fn drill_down_returns_to_same_page() {
        let mut app = app_with_archives(23);
        press(&mut app, KeyCode::Char('n'));
        type_line(&mut app, "12");
        app.update(Action::Loaded(Ok(Loaded::Games {
            title: "Games".into(),
            games: vec![Game::default(); 3],
        })));
        assert!(matches!(app.view(), View::Games(_)));

        type_line(&mut app, "2");
        assert!(matches!(app.view(), View::Detail(_)));

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.view(), View::Games(_)));
        press(&mut app, KeyCode::Esc);
        assert_eq!(archive_page(&app), 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view().title(), "Information for erik");
    }

    #[test]
    fn empty_archive_list_only_exits() {
        let mut app = app_with_archives(0);
        let depth = app.depth();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(type_line(&mut app, "1"), None);
        assert_eq!(app.depth(), depth);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.depth(), depth - 1);
    }

    #[test]
    fn chunked_view_walks_forward_then_exits() {
        let mut app = App::new(PagingConfig::default());
        type_line(&mut app, "3");
        assert_eq!(type_line(&mut app, "1"), Some(Effect::Fetch(Load::Titled(Title::Gm))));
        app.update(Action::Loaded(Ok(Loaded::Titled {
            title: Title::Gm,
            players: (0..45).map(|i| format!("gm{}", i)).collect(),
        })));
        let depth = app.depth();

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        match app.view() {
            View::Titled(list) => assert_eq!(list.session.cursor().unwrap().current_page(), 2),
            other => panic!("expected titled list, got {}", other.title()),
        }
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.depth(), depth - 1);
    }

    #[test]
    fn leaderboard_category_selection_fetches_profile() {
        let mut app = App::new(PagingConfig::default());
        assert_eq!(type_line(&mut app, "4"), Some(Effect::Fetch(Load::Leaderboards)));
        app.update(Action::Loaded(Ok(Loaded::Leaderboards(Box::new(Leaderboards {
            live_bullet: vec![
                LeaderboardPlayer {
                    username: "first".into(),
                    rank: 1,
                    ..Default::default()
                },
                LeaderboardPlayer {
                    username: "second".into(),
                    rank: 2,
                    ..Default::default()
                },
            ],
            ..Default::default()
        })))));
        type_line(&mut app, "2");
        assert_eq!(app.view().title(), "Live Bullet Leaderboard");
        assert_eq!(
            type_line(&mut app, "2"),
            Some(Effect::Fetch(Load::Profile("second".into())))
        );
    }

    #[test]
    fn player_club_selection_uses_url_id() {
        let mut app = App::new(PagingConfig::default());
        app.update(Action::Loaded(Ok(Loaded::PlayerClubs {
            username: "erik".into(),
            clubs: vec![PlayerClub {
                id: "https://api.chess.com/pub/club/team-norway".into(),
                name: "Team Norway".into(),
                ..Default::default()
            }],
        })));
        assert_eq!(
            type_line(&mut app, "1"),
            Some(Effect::Fetch(Load::Club("team-norway".into())))
        );
    }

    #[test]
    fn detail_keys() {
        let mut app = App::new(PagingConfig::default());
        app.update(Action::Push(Box::new(View::Detail(DetailView::new(Detail::Game(
            Box::new(Game {
                url: "https://www.chess.com/game/live/1".into(),
                pgn: "1. e4 e5".into(),
                ..Default::default()
            }),
        ))))));
        assert_eq!(
            press(&mut app, KeyCode::Char('v')),
            Some(Effect::Pager("1. e4 e5".into()))
        );
        assert_eq!(
            press(&mut app, KeyCode::Char('o')),
            Some(Effect::OpenInBrowser("https://www.chess.com/game/live/1".into()))
        );
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Up);
        match app.view() {
            View::Detail(view) => assert_eq!(view.scroll, 1),
            other => panic!("expected detail, got {}", other.title()),
        }
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.depth(), 1);
    }
}
