use crate::utils::parse_match_time;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Matches grouped by gender, then by team name.
pub type GroupedMatches = BTreeMap<String, BTreeMap<String, Vec<Match>>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gym {
    pub name: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    #[serde(rename = "latitude")]
    pub lat: String,
    #[serde(rename = "longitude")]
    pub lon: String,
    #[serde(rename = "mapsLink", skip_serializing_if = "Option::is_none", default)]
    pub maps_link: Option<String>,
    #[serde(rename = "wazeLink", skip_serializing_if = "Option::is_none", default)]
    pub waze_link: Option<String>,
}

/// Raw kickoff string plus its French, human readable pieces. The pieces stay
/// empty when the raw value cannot be parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    pub raw: String,
    pub day: String,
    pub day_num: String,
    pub month: String,
    pub year: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub home: String,
    pub away: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Referees {
    pub ref1: String,
    pub ref2: String,
}

impl Referees {
    pub fn is_assigned(&self) -> bool {
        !self.ref1.is_empty() || !self.ref2.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub url: String,
    pub has_referees: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gym: Option<Gym>,
    pub date: DateInfo,
    #[serde(rename = "championshipDay")]
    pub championship_day: String,
    pub parsed_at: String,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub is_next: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub teams: Option<Teams>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub referees: Option<Referees>,
    #[serde(skip)]
    pub gender: String,
    pub level: String,
}

impl Match {
    /// `gender|level`, the key used to pick the next match of a team.
    pub fn category_key(&self) -> String {
        format!("{}|{}", self.gender, self.level)
    }

    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        if self.date.raw.is_empty() {
            return None;
        }
        parse_match_time(&self.date.raw).ok()
    }
}
