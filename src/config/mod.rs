use crate::config::cli::Args;
use crate::domain::storage::Storage;
use crate::domain::TeamConfig;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::FileSystemStore;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub const DEFAULT_BASE_URL: &str = "https://www.ffhandball.fr/competitions/saison-2025-2026-21/";
pub const DEFAULT_CONCURRENCY: usize = 4;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}

fn default_teams() -> Vec<TeamConfig> {
    vec![
        TeamConfig::new(
            "ASC Rennais 1",
            "regional/16-ans-excellence-masculine-bretagne-27844/",
            "equipe-1945001/",
            "poule-168419/",
            "male",
            "regional_excellence",
        ),
        TeamConfig::new(
            "ASC Rennais 1",
            "regional/16-ans-excellence-feminine-bretagne-27853/",
            "equipe-1945199/",
            "poule-168469/",
            "female",
            "regional_excellence",
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Detail pages fetched at the same time for one team
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    #[serde(default = "default_teams")]
    pub teams: Vec<TeamConfig>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            concurrency: default_concurrency(),
            channel_capacity: default_channel_capacity(),
            teams: default_teams(),
        }
    }
}

impl ScraperConfig {
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(ScrapeError::Config(
                "concurrency must be greater than 0".to_string(),
            ));
        }
        if self.channel_capacity == 0 {
            return Err(ScrapeError::Config(
                "channel_capacity must be greater than 0".to_string(),
            ));
        }
        if self.teams.is_empty() {
            return Err(ScrapeError::Config("no team configured".to_string()));
        }
        Ok(())
    }
}

pub struct Config {
    pub args: Args,
    pub scraper_config: ScraperConfig,
    pub http_client: Client,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        Self::from_args(args, &FileSystemStore::new())
    }

    pub fn from_args(args: Args, store: &dyn Storage) -> Result<Self> {
        let scraper_config = match &args.config_file {
            Some(path) => store.load_scraper_config(path)?,
            None => ScraperConfig::default(),
        };
        scraper_config.validate()?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            scraper_config,
            http_client,
        })
    }

    pub fn log_summary(&self) {
        info!(
            "Following {} team(s) on {} with {} concurrent request(s) per team",
            self.scraper_config.teams.len(),
            self.scraper_config.base_url,
            self.scraper_config.concurrency
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn missing_fields_fall_back_to_builtins() {
        let config: ScraperConfig = serde_json::from_str(r#"{"concurrency": 2}"#).unwrap();
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert_eq!(config.teams.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_invalid_values() {
        let mut config = ScraperConfig::default();
        config.concurrency = 0;
        assert!(matches!(config.validate(), Err(ScrapeError::Config(_))));

        let mut config = ScraperConfig::default();
        config.teams.clear();
        assert!(matches!(config.validate(), Err(ScrapeError::Config(_))));
    }

    #[test]
    fn config_file_replaces_the_builtin_teams() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        std::fs::write(
            &path,
            r#"{"teams":[{"name":"ASC Rennais 2","championship_url":"d/","team_url":"e/","pool_url":"p/","gender":"male","level":"departemental"}]}"#,
        )
        .unwrap();
        let path_arg = path.to_str().unwrap();

        let args = Args::try_parse_from(["tchootchoo", "--config-file", path_arg]).unwrap();
        let config = Config::from_args(args, &FileSystemStore::new()).unwrap();
        assert_eq!(config.scraper_config.teams.len(), 1);
        assert_eq!(config.scraper_config.teams[0].name, "ASC Rennais 2");
        assert_eq!(config.scraper_config.concurrency, DEFAULT_CONCURRENCY);

        std::fs::write(&path, r#"{"teams":[]}"#).unwrap();
        let args = Args::try_parse_from(["tchootchoo", "--config-file", path_arg]).unwrap();
        let result = Config::from_args(args, &FileSystemStore::new());
        assert!(matches!(result, Err(ScrapeError::Config(_))));
    }
}
