use serde::{Deserialize, Serialize};

/// A team followed by the bot, located by the path segments of its
/// championship, team and pool pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub championship_url: String,
    pub team_url: String,
    pub pool_url: String,
    pub gender: String,
    pub level: String,
}

impl TeamConfig {
    pub fn new(
        name: &str,
        championship_url: &str,
        team_url: &str,
        pool_url: &str,
        gender: &str,
        level: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            championship_url: championship_url.to_string(),
            team_url: team_url.to_string(),
            pool_url: pool_url.to_string(),
            gender: gender.to_string(),
            level: level.to_string(),
        }
    }

    pub fn listing_url(&self, base: &str) -> String {
        format!("{}{}{}", base, self.championship_url, self.team_url)
    }

    pub fn match_url(&self, base: &str, match_id: &str) -> String {
        format!(
            "{}{}{}rencontre-{}/",
            base, self.championship_url, self.pool_url, match_id
        )
    }

    pub fn category_key(&self) -> String {
        format!("{}|{}", self.gender, self.level)
    }
}
