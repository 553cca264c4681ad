//! Response shapes of the published-data API.
//!
//! Every shape is `#[serde(default)]`: the API adds and drops fields over
//! time, so anything missing decodes to its zero value and unknown fields are
//! ignored. Keys are lower-cased before decoding (see `client::decode`).

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub username: String,
    pub name: String,
    pub title: String,
    pub url: String,
    pub avatar: String,
    pub followers: u64,
    pub country: String,
    pub last_online: i64,
    pub joined: i64,
    pub is_streamer: bool,
    pub status: String,
    pub league: String,
    pub location: String,
    pub twitch_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub chess_blitz: Option<ChessStats>,
    pub chess_bullet: Option<ChessStats>,
    pub chess_rapid: Option<ChessStats>,
    pub chess_daily: Option<ChessStats>,
    pub tactics: Option<HighLow>,
    pub lessons: Option<HighLow>,
    pub puzzle_rush: Option<PuzzleRushStats>,
    pub fide: Option<u32>,
}

impl PlayerStats {
    /// Time-control ladders in display order.
    pub fn ladders(&self) -> [(&'static str, Option<&ChessStats>); 4] {
        [
            ("Blitz", self.chess_blitz.as_ref()),
            ("Bullet", self.chess_bullet.as_ref()),
            ("Rapid", self.chess_rapid.as_ref()),
            ("Daily", self.chess_daily.as_ref()),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChessStats {
    pub last: Option<Rating>,
    pub best: Option<Rating>,
    pub record: Option<Record>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Rating {
    pub rating: i64,
    pub date: i64,
    pub rd: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Record {
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
    pub time_per_move: Option<u32>,
    pub timeout_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HighLow {
    pub highest: Option<Rating>,
    pub lowest: Option<Rating>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PuzzleRushStats {
    pub best: Option<PuzzleRushBest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PuzzleRushBest {
    pub total_attempts: u32,
    pub score: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Game {
    pub url: String,
    pub pgn: String,
    pub time_control: String,
    pub end_time: i64,
    pub rated: bool,
    pub tcn: String,
    pub uuid: String,
    pub initial_setup: String,
    pub fen: String,
    pub time_class: String,
    pub rules: String,
    pub white: GamePlayer,
    pub black: GamePlayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GamePlayer {
    pub username: String,
    pub rating: i64,
    pub result: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub uuid: String,
}

/// Player result codes that mean the game was drawn.
const DRAW_CODES: &[&str] = &[
    "agreed",
    "repetition",
    "stalemate",
    "insufficient",
    "50move",
    "timevsinsufficient",
];

impl Game {
    /// Score in `1-0` / `0-1` / `½-½` notation, `*` when undecided.
    pub fn score(&self) -> &'static str {
        if self.white.result == "win" {
            "1-0"
        } else if self.black.result == "win" {
            "0-1"
        } else if DRAW_CODES.contains(&self.white.result.as_str())
            || DRAW_CODES.contains(&self.black.result.as_str())
        {
            "½-½"
        } else {
            "*"
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameArchive {
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArchiveIndex {
    pub archives: Vec<String>,
}

/// One month of games, identified by the trailing `{year}/{month}` of its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub url: String,
    pub year: i32,
    pub month: u32,
}

impl Archive {
    pub fn parse(url: &str) -> Self {
        let mut parts = url.trim_end_matches('/').rsplit('/');
        let month = parts.next().and_then(|m| m.parse().ok());
        let year = parts.next().and_then(|y| y.parse().ok());
        match (year, month) {
            (Some(year), Some(month)) => Self {
                url: url.to_string(),
                year,
                month,
            },
            _ => Self {
                url: url.to_string(),
                year: 0,
                month: 0,
            },
        }
    }

    /// Parse archive URLs and order them newest first.
    pub fn newest_first(urls: Vec<String>) -> Vec<Archive> {
        let mut archives: Vec<Archive> = urls.iter().map(|u| Archive::parse(u)).collect();
        archives.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
        archives
    }

    pub fn is_dated(&self) -> bool {
        self.year != 0
    }
}

impl fmt::Display for Archive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dated() {
            write!(f, "{}/{:02}", self.year, self.month)
        } else {
            write!(f, "{}", self.url)
        }
    }
}

/// Club entry as listed under `/player/{username}/clubs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerClub {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub last_activity: i64,
    pub icon: String,
    pub url: String,
    pub joined: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerClubs {
    pub clubs: Vec<PlayerClub>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClubProfile {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub club_id: u64,
    pub url: String,
    pub icon: String,
    pub country: String,
    pub average_daily_rating: i64,
    pub members_count: u64,
    pub created: i64,
    pub last_activity: i64,
    pub admin: Vec<String>,
    pub description: String,
    pub visibility: String,
    pub join_request: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClubMember {
    pub username: String,
    pub joined: i64,
}

/// Members grouped by recent activity; older payloads carry a flat `members` list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClubMembers {
    pub weekly: Vec<ClubMember>,
    pub monthly: Vec<ClubMember>,
    pub all_time: Vec<ClubMember>,
    pub members: Vec<ClubMember>,
}

impl ClubMembers {
    pub fn into_members(self) -> Vec<ClubMember> {
        let mut all = self.weekly;
        all.extend(self.monthly);
        all.extend(self.all_time);
        all.extend(self.members);
        all
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tournament {
    pub url: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub status: String,
    pub start_time: i64,
    pub end_time: i64,
    pub settings: Option<TournamentSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    #[serde(rename = "type")]
    pub kind: String,
    pub time_class: String,
    pub time_control: String,
    pub rated: bool,
    pub variant: String,
}

/// Tournaments grouped by state; older payloads carry a flat `tournaments` list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClubTournaments {
    pub in_progress: Vec<Tournament>,
    pub registered: Vec<Tournament>,
    pub finished: Vec<Tournament>,
    pub tournaments: Vec<Tournament>,
}

impl ClubTournaments {
    pub fn into_tournaments(self) -> Vec<Tournament> {
        let mut all = self.in_progress;
        all.extend(self.registered);
        all.extend(self.finished);
        all.extend(self.tournaments);
        all
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TournamentRound {
    pub url: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub games: Vec<RoundGame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoundGame {
    pub url: String,
    pub white: String,
    pub black: String,
    pub pgn: String,
    pub result: String,
    pub time_control: String,
    pub end_time: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TournamentRounds {
    pub rounds: Vec<TournamentRound>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TournamentStandings {
    pub standings: Vec<Standing>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Standing {
    pub rank: u32,
    pub player_id: String,
    pub username: String,
    pub points: f64,
    pub tie_break: f64,
    pub performance: i64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailyPuzzle {
    pub title: String,
    pub url: String,
    pub publish_time: Option<i64>,
    pub fen: String,
    pub pgn: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TitledPlayers {
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Leaderboards {
    pub daily: Vec<LeaderboardPlayer>,
    pub daily960: Vec<LeaderboardPlayer>,
    pub live_blitz: Vec<LeaderboardPlayer>,
    pub live_bullet: Vec<LeaderboardPlayer>,
    pub live_rapid: Vec<LeaderboardPlayer>,
    pub tactics: Vec<LeaderboardPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeaderboardPlayer {
    pub username: String,
    pub rank: u32,
    pub score: i64,
    pub avatar: String,
    pub title: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardCategory {
    LiveBlitz,
    LiveBullet,
    LiveRapid,
    Daily,
    Daily960,
    Tactics,
}

impl LeaderboardCategory {
    pub const ALL: [LeaderboardCategory; 6] = [
        LeaderboardCategory::LiveBlitz,
        LeaderboardCategory::LiveBullet,
        LeaderboardCategory::LiveRapid,
        LeaderboardCategory::Daily,
        LeaderboardCategory::Daily960,
        LeaderboardCategory::Tactics,
    ];

    pub fn entries<'a>(&self, boards: &'a Leaderboards) -> &'a [LeaderboardPlayer] {
        match self {
            LeaderboardCategory::LiveBlitz => &boards.live_blitz,
            LeaderboardCategory::LiveBullet => &boards.live_bullet,
            LeaderboardCategory::LiveRapid => &boards.live_rapid,
            LeaderboardCategory::Daily => &boards.daily,
            LeaderboardCategory::Daily960 => &boards.daily960,
            LeaderboardCategory::Tactics => &boards.tactics,
        }
    }
}

impl fmt::Display for LeaderboardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardCategory::LiveBlitz => write!(f, "Live Blitz"),
            LeaderboardCategory::LiveBullet => write!(f, "Live Bullet"),
            LeaderboardCategory::LiveRapid => write!(f, "Live Rapid"),
            LeaderboardCategory::Daily => write!(f, "Daily Chess"),
            LeaderboardCategory::Daily960 => write!(f, "Daily 960"),
            LeaderboardCategory::Tactics => write!(f, "Tactics"),
        }
    }
}
