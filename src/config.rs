use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.chess.com/pub";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("rook/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Page sizes for the paginated views. Zero is not a valid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    pub archives: usize,
    pub games: usize,
    pub lists: usize,
    pub leaderboard: usize,
    pub chunk: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            archives: 10,
            games: 10,
            lists: 10,
            leaderboard: 20,
            chunk: 20,
        }
    }
}

impl PagingConfig {
    fn sanitized(self) -> Self {
        let default = PagingConfig::default();
        let pick = |value: usize, fallback: usize, name: &str| {
            if value == 0 {
                warn!(setting = name, "page size must be positive, using {}", fallback);
                fallback
            } else {
                value
            }
        };
        Self {
            archives: pick(self.archives, default.archives, "archives"),
            games: pick(self.games, default.games, "games"),
            lists: pick(self.lists, default.lists, "lists"),
            leaderboard: pick(self.leaderboard, default.leaderboard, "leaderboard"),
            chunk: pick(self.chunk, default.chunk, "chunk"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GeneralConfig {
    pub pager: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("rook").join("config.toml"))
}

impl Config {
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        match Self::parse(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring invalid config: {}", e);
                Config::default()
            }
        }
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config = toml::from_str::<Config>(content)?;
        config.paging = config.paging.sanitized();
        if config.api.base_url.trim().is_empty() {
            config.api.base_url = DEFAULT_BASE_URL.to_string();
        }
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[general]
pager = "bat --style=plain"

[api]
base_url = "http://localhost:8080/pub/"
user_agent = "rook-test"

[paging]
archives = 5
games = 15
lists = 8
leaderboard = 25
chunk = 30
"#;
        let config = Config::parse(toml_str).unwrap();
        assert_eq!(config.general.pager.as_deref(), Some("bat --style=plain"));
        assert_eq!(config.api.base_url, "http://localhost:8080/pub");
        assert_eq!(config.api.user_agent, "rook-test");
        assert_eq!(config.paging.archives, 5);
        assert_eq!(config.paging.games, 15);
        assert_eq!(config.paging.lists, 8);
        assert_eq!(config.paging.leaderboard, 25);
        assert_eq!(config.paging.chunk, 30);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.user_agent.starts_with("rook/"));
        assert_eq!(config.paging, PagingConfig::default());
        assert!(config.general.pager.is_none());
    }

    #[test]
    fn partial_paging_keeps_other_defaults() {
        let config = Config::parse("[paging]\ngames = 3\n").unwrap();
        assert_eq!(config.paging.games, 3);
        assert_eq!(config.paging.archives, 10);
        assert_eq!(config.paging.chunk, 20);
    }

    #[test]
    fn zero_page_size_falls_back() {
        let config = Config::parse("[paging]\narchives = 0\nchunk = 0\n").unwrap();
        assert_eq!(config.paging.archives, 10);
        assert_eq!(config.paging.chunk, 20);
    }

    #[test]
    fn blank_base_url_falls_back() {
        let config = Config::parse("[api]\nbase_url = \"  \"\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse("[paging\narchives = ").is_err());
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let config = Config::load(); // no config file in the test environment
        assert!(config.paging.archives > 0);
        assert!(!config.api.base_url.is_empty());
    }
}
