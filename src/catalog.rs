use std::fmt;

use urlencoding::encode;

/// Federation titles queryable through `/titled/{title}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    Gm,
    Im,
    Fm,
    Wgm,
    Wim,
    Wfm,
    Nm,
    Cm,
    Wcm,
}

impl Title {
    pub const ALL: [Title; 9] = [
        Title::Gm,
        Title::Im,
        Title::Fm,
        Title::Wgm,
        Title::Wim,
        Title::Wfm,
        Title::Nm,
        Title::Cm,
        Title::Wcm,
    ];

    pub fn as_api_str(&self) -> &'static str {
        match self {
            Title::Gm => "GM",
            Title::Im => "IM",
            Title::Fm => "FM",
            Title::Wgm => "WGM",
            Title::Wim => "WIM",
            Title::Wfm => "WFM",
            Title::Nm => "NM",
            Title::Cm => "CM",
            Title::Wcm => "WCM",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Title::Gm => write!(f, "Grandmaster"),
            Title::Im => write!(f, "International Master"),
            Title::Fm => write!(f, "FIDE Master"),
            Title::Wgm => write!(f, "Woman Grandmaster"),
            Title::Wim => write!(f, "Woman International Master"),
            Title::Wfm => write!(f, "Woman FIDE Master"),
            Title::Nm => write!(f, "National Master"),
            Title::Cm => write!(f, "Candidate Master"),
            Title::Wcm => write!(f, "Woman Candidate Master"),
        }
    }
}

/// A request for one published-data resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    PlayerProfile { username: String },
    PlayerStats { username: String },
    MonthlyArchive { username: String, year: i32, month: u32 },
    ArchiveIndex { username: String },
    PlayerClubs { username: String },
    Club { id: String },
    ClubMembers { id: String },
    ClubTournaments { id: String },
    Tournament { id: String },
    TournamentRounds { id: String },
    TournamentStandings { id: String },
    DailyPuzzle,
    Titled(Title),
    Leaderboards,
    /// Absolute URL handed out by the archive index, requested verbatim.
    ArchiveUrl(String),
}

impl Resource {
    pub fn path(&self) -> String {
        match self {
            Resource::PlayerProfile { username } => format!("/player/{}", encode(username)),
            Resource::PlayerStats { username } => format!("/player/{}/stats", encode(username)),
            Resource::MonthlyArchive {
                username,
                year,
                month,
            } => format!("/player/{}/games/{}/{:02}", encode(username), year, month),
            Resource::ArchiveIndex { username } => {
                format!("/player/{}/games/archives", encode(username))
            }
            Resource::PlayerClubs { username } => format!("/player/{}/clubs", encode(username)),
            Resource::Club { id } => format!("/club/{}", encode(id)),
            Resource::ClubMembers { id } => format!("/club/{}/members", encode(id)),
            Resource::ClubTournaments { id } => format!("/club/{}/tournaments", encode(id)),
            Resource::Tournament { id } => format!("/tournament/{}", encode(id)),
            Resource::TournamentRounds { id } => format!("/tournament/{}/rounds", encode(id)),
            Resource::TournamentStandings { id } => {
                format!("/tournament/{}/standings", encode(id))
            }
            Resource::DailyPuzzle => "/puzzle".to_string(),
            Resource::Titled(title) => format!("/titled/{}", title.as_api_str()),
            Resource::Leaderboards => "/leaderboards".to_string(),
            Resource::ArchiveUrl(url) => url.clone(),
        }
    }

    /// Full request URL: `base ++ path`, except archive URLs which are already absolute.
    pub fn url(&self, base: &str) -> String {
        match self {
            Resource::ArchiveUrl(url) => url.clone(),
            _ => format!("{}{}", base, self.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.chess.com/pub";

    fn player(username: &str) -> String {
        username.to_string()
    }

    #[test]
    fn player_paths() {
        assert_eq!(
            Resource::PlayerProfile { username: player("hikaru") }.path(),
            "/player/hikaru"
        );
        assert_eq!(
            Resource::PlayerStats { username: player("hikaru") }.path(),
            "/player/hikaru/stats"
        );
        assert_eq!(
            Resource::ArchiveIndex { username: player("hikaru") }.path(),
            "/player/hikaru/games/archives"
        );
        assert_eq!(
            Resource::PlayerClubs { username: player("hikaru") }.path(),
            "/player/hikaru/clubs"
        );
    }

    #[test]
    fn monthly_archive_pads_month() {
        let resource = Resource::MonthlyArchive {
            username: player("erik"),
            year: 2024,
            month: 3,
        };
        assert_eq!(resource.path(), "/player/erik/games/2024/03");

        let resource = Resource::MonthlyArchive {
            username: player("erik"),
            year: 2023,
            month: 11,
        };
        assert_eq!(resource.path(), "/player/erik/games/2023/11");
    }

    #[test]
    fn club_and_tournament_paths() {
        let id = "chess-com-developer-community".to_string();
        assert_eq!(Resource::Club { id: id.clone() }.path(), format!("/club/{}", id));
        assert_eq!(
            Resource::ClubMembers { id: id.clone() }.path(),
            format!("/club/{}/members", id)
        );
        assert_eq!(
            Resource::ClubTournaments { id: id.clone() }.path(),
            format!("/club/{}/tournaments", id)
        );

        let id = "rapid-chess-league".to_string();
        assert_eq!(
            Resource::Tournament { id: id.clone() }.path(),
            "/tournament/rapid-chess-league"
        );
        assert_eq!(
            Resource::TournamentRounds { id: id.clone() }.path(),
            "/tournament/rapid-chess-league/rounds"
        );
        assert_eq!(
            Resource::TournamentStandings { id }.path(),
            "/tournament/rapid-chess-league/standings"
        );
    }

    #[test]
    fn static_paths() {
        assert_eq!(Resource::DailyPuzzle.path(), "/puzzle");
        assert_eq!(Resource::Leaderboards.path(), "/leaderboards");
        assert_eq!(Resource::Titled(Title::Wgm).path(), "/titled/WGM");
    }

    #[test]
    fn parameters_are_percent_encoded() {
        assert_eq!(
            Resource::PlayerProfile { username: player("a b/c") }.path(),
            "/player/a%20b%2Fc"
        );
    }

    #[test]
    fn url_prefixes_base() {
        assert_eq!(
            Resource::DailyPuzzle.url(BASE),
            "https://api.chess.com/pub/puzzle"
        );
    }

    #[test]
    fn archive_url_is_passed_through_verbatim() {
        let url = "https://api.chess.com/pub/player/erik/games/2024/01".to_string();
        assert_eq!(Resource::ArchiveUrl(url.clone()).url(BASE), url);
        assert_eq!(Resource::ArchiveUrl(url.clone()).url("http://other"), url);
    }

    #[test]
    fn title_order_matches_menu() {
        let codes: Vec<_> = Title::ALL.iter().map(|t| t.as_api_str()).collect();
        assert_eq!(
            codes,
            ["GM", "IM", "FM", "WGM", "WIM", "WFM", "NM", "CM", "WCM"]
        );
        assert_eq!(Title::Cm.to_string(), "Candidate Master");
    }
}
