use crate::app::View;
use crate::catalog::Title;
use crate::client::ChessClient;
use crate::error::FetchError;
use crate::types::{
    Archive, ClubMember, ClubProfile, DailyPuzzle, Game, Leaderboards, PlayerClub,
    PlayerProfile, PlayerStats, Standing, Tournament, TournamentRound,
};

/// A fetch requested by a view. Carries the context the resulting view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load {
    Profile(String),
    Stats(String),
    MonthGames { username: String, year: i32, month: u32 },
    Archives(String),
    ArchiveGames { username: String, archive: Archive },
    PlayerClubs(String),
    Puzzle,
    Titled(Title),
    Leaderboards,
    Club(String),
    ClubMembers { id: String, name: String },
    ClubTournaments { id: String, name: String },
    Tournament(String),
    Rounds { id: String, name: String },
    Standings { id: String, name: String },
}

/// A successfully fetched payload, ready to become a view.
#[derive(Debug, Clone)]
pub enum Loaded {
    Profile(Box<PlayerProfile>),
    Stats {
        username: String,
        stats: Box<PlayerStats>,
    },
    Games {
        title: String,
        games: Vec<Game>,
    },
    Archives {
        username: String,
        archives: Vec<Archive>,
    },
    PlayerClubs {
        username: String,
        clubs: Vec<PlayerClub>,
    },
    Puzzle(Box<DailyPuzzle>),
    Titled {
        title: Title,
        players: Vec<String>,
    },
    Leaderboards(Box<Leaderboards>),
    Club {
        id: String,
        club: Box<ClubProfile>,
    },
    ClubMembers {
        name: String,
        members: Vec<ClubMember>,
    },
    ClubTournaments {
        name: String,
        tournaments: Vec<Tournament>,
    },
    Tournament {
        id: String,
        tournament: Box<Tournament>,
    },
    Rounds {
        name: String,
        rounds: Vec<TournamentRound>,
    },
    Standings {
        name: String,
        standings: Vec<Standing>,
    },
}

impl Load {
    pub fn describe(&self) -> String {
        match self {
            Load::Profile(username) => format!("profile of {}", username),
            Load::Stats(username) => format!("stats of {}", username),
            Load::MonthGames {
                username,
                year,
                month,
            } => format!("games of {} ({}/{:02})", username, year, month),
            Load::Archives(username) => format!("game archives of {}", username),
            Load::ArchiveGames { archive, .. } => format!("games from {}", archive),
            Load::PlayerClubs(username) => format!("clubs of {}", username),
            Load::Puzzle => "daily puzzle".to_string(),
            Load::Titled(title) => format!("{} players", title.as_api_str()),
            Load::Leaderboards => "leaderboards".to_string(),
            Load::Club(id) => format!("club {}", id),
            Load::ClubMembers { name, .. } => format!("members of {}", name),
            Load::ClubTournaments { name, .. } => format!("tournaments of {}", name),
            Load::Tournament(id) => format!("tournament {}", id),
            Load::Rounds { name, .. } => format!("rounds of {}", name),
            Load::Standings { name, .. } => format!("standings of {}", name),
        }
    }

    pub async fn run(self, client: &ChessClient) -> Result<Loaded, FetchError> {
        let loaded = match self {
            Load::Profile(username) => {
                Loaded::Profile(Box::new(client.player_profile(&username).await?))
            }
            Load::Stats(username) => {
                let stats = client.player_stats(&username).await?;
                Loaded::Stats {
                    username,
                    stats: Box::new(stats),
                }
            }
            Load::MonthGames {
                username,
                year,
                month,
            } => Loaded::Games {
                games: client.monthly_games(&username, year, month).await?,
                title: format!("Recent games of {} ({}/{:02})", username, year, month),
            },
            Load::Archives(username) => Loaded::Archives {
                archives: client.archives(&username).await?,
                username,
            },
            Load::ArchiveGames { username, archive } => Loaded::Games {
                games: client.archive_games(&archive.url).await?,
                title: format!("Games for {} - {}", username, archive),
            },
            Load::PlayerClubs(username) => Loaded::PlayerClubs {
                clubs: client.player_clubs(&username).await?,
                username,
            },
            Load::Puzzle => Loaded::Puzzle(Box::new(client.daily_puzzle().await?)),
            Load::Titled(title) => Loaded::Titled {
                players: client.titled_players(title).await?,
                title,
            },
            Load::Leaderboards => Loaded::Leaderboards(Box::new(client.leaderboards().await?)),
            Load::Club(id) => Loaded::Club {
                club: Box::new(client.club(&id).await?),
                id,
            },
            Load::ClubMembers { id, name } => Loaded::ClubMembers {
                members: client.club_members(&id).await?,
                name,
            },
            Load::ClubTournaments { id, name } => Loaded::ClubTournaments {
                tournaments: client.club_tournaments(&id).await?,
                name,
            },
            Load::Tournament(id) => Loaded::Tournament {
                tournament: Box::new(client.tournament(&id).await?),
                id,
            },
            Load::Rounds { id, name } => Loaded::Rounds {
                rounds: client.tournament_rounds(&id).await?,
                name,
            },
            Load::Standings { id, name } => Loaded::Standings {
                standings: client.tournament_standings(&id).await?.standings,
                name,
            },
        };
        Ok(loaded)
    }
}

/// Side effect the main loop performs on behalf of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(Load),
    Pager(String),
    OpenInBrowser(String),
    YankUrl(String),
}

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,
    Push(Box<View>),
    Load(Load),
    Loaded(Result<Loaded, FetchError>),

    // Detail views
    ScrollUp,
    ScrollDown,
    ViewPgn(String),
    OpenInBrowser(String),
    YankUrl(String),

    Notice(String),
    Error(String),
    None,
}

impl From<FetchError> for Action {
    fn from(err: FetchError) -> Self {
        Action::Error(format!("Error fetching data: {}", err))
    }
}
