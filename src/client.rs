use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::catalog::{Resource, Title};
use crate::error::FetchError;
use crate::transport::Transport;
use crate::types::{
    Archive, ArchiveIndex, ClubMember, ClubMembers, ClubProfile, ClubTournaments, DailyPuzzle,
    Game, GameArchive, Leaderboards, PlayerClub, PlayerClubs, PlayerProfile, PlayerStats,
    TitledPlayers, Tournament, TournamentRound, TournamentRounds, TournamentStandings,
};

/// Read-only client for the published-data API. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct ChessClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl ChessClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch<T: DeserializeOwned>(&self, resource: &Resource) -> Result<T, FetchError> {
        let url = resource.url(&self.base_url);
        debug!(%url, "GET");

        let reply = self.transport.get(&url).await?;
        if !reply.is_success() {
            // Reported to the user through the status bar; stderr belongs to the TUI.
            debug!(%url, status = reply.status, "request failed");
            return Err(FetchError::HttpStatus(reply.status));
        }

        decode(&reply.body)
    }

    pub async fn player_profile(&self, username: &str) -> Result<PlayerProfile, FetchError> {
        self.fetch(&Resource::PlayerProfile {
            username: username.to_string(),
        })
        .await
    }

    pub async fn player_stats(&self, username: &str) -> Result<PlayerStats, FetchError> {
        self.fetch(&Resource::PlayerStats {
            username: username.to_string(),
        })
        .await
    }

    pub async fn monthly_games(
        &self,
        username: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Game>, FetchError> {
        let archive: GameArchive = self
            .fetch(&Resource::MonthlyArchive {
                username: username.to_string(),
                year,
                month,
            })
            .await?;
        Ok(archive.games)
    }

    /// Archive index, newest month first.
    pub async fn archives(&self, username: &str) -> Result<Vec<Archive>, FetchError> {
        let index: ArchiveIndex = self
            .fetch(&Resource::ArchiveIndex {
                username: username.to_string(),
            })
            .await?;
        Ok(Archive::newest_first(index.archives))
    }

    pub async fn archive_games(&self, archive_url: &str) -> Result<Vec<Game>, FetchError> {
        let archive: GameArchive = self
            .fetch(&Resource::ArchiveUrl(archive_url.to_string()))
            .await?;
        Ok(archive.games)
    }

    pub async fn player_clubs(&self, username: &str) -> Result<Vec<PlayerClub>, FetchError> {
        let clubs: PlayerClubs = self
            .fetch(&Resource::PlayerClubs {
                username: username.to_string(),
            })
            .await?;
        Ok(clubs.clubs)
    }

    pub async fn club(&self, id: &str) -> Result<ClubProfile, FetchError> {
        self.fetch(&Resource::Club { id: id.to_string() }).await
    }

    pub async fn club_members(&self, id: &str) -> Result<Vec<ClubMember>, FetchError> {
        let members: ClubMembers = self
            .fetch(&Resource::ClubMembers { id: id.to_string() })
            .await?;
        Ok(members.into_members())
    }

    pub async fn club_tournaments(&self, id: &str) -> Result<Vec<Tournament>, FetchError> {
        let tournaments: ClubTournaments = self
            .fetch(&Resource::ClubTournaments { id: id.to_string() })
            .await?;
        Ok(tournaments.into_tournaments())
    }

    pub async fn tournament(&self, id: &str) -> Result<Tournament, FetchError> {
        self.fetch(&Resource::Tournament { id: id.to_string() })
            .await
    }

    pub async fn tournament_rounds(&self, id: &str) -> Result<Vec<TournamentRound>, FetchError> {
        let rounds: TournamentRounds = self
            .fetch(&Resource::TournamentRounds { id: id.to_string() })
            .await?;
        Ok(rounds.rounds)
    }

    pub async fn tournament_standings(&self, id: &str) -> Result<TournamentStandings, FetchError> {
        self.fetch(&Resource::TournamentStandings { id: id.to_string() })
            .await
    }

    pub async fn daily_puzzle(&self) -> Result<DailyPuzzle, FetchError> {
        self.fetch(&Resource::DailyPuzzle).await
    }

    pub async fn titled_players(&self, title: Title) -> Result<Vec<String>, FetchError> {
        let titled: TitledPlayers = self.fetch(&Resource::Titled(title)).await?;
        Ok(titled.players)
    }

    pub async fn leaderboards(&self) -> Result<Leaderboards, FetchError> {
        self.fetch(&Resource::Leaderboards).await
    }
}

/// Decode a JSON body permissively: keys match case-insensitively, `null`
/// members count as absent, unknown members are ignored.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    serde_json::from_value(normalize(value)).map_err(|e| FetchError::Decode(e.to_string()))
}

fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, member) in map {
                if member.is_null() {
                    continue;
                }
                out.insert(key.to_lowercase(), normalize(member));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(normalize)
                .collect(),
        ),
        other => other,
    }
}
