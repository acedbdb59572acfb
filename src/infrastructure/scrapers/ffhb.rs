use super::{component_attributes, Selectors};
use crate::domain::{DateInfo, Gym, Match, Referees, TeamConfig, Teams};
use crate::utils::{capitalize_words, describe_date};
use scraper::Html;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Marker the federation puts in place of the referee pair before any
/// referee is assigned.
const NO_REFEREES: &str = "[null,null]";

#[derive(Debug, Deserialize)]
struct MatchList {
    #[serde(rename = "rencontres", default)]
    meetings: Vec<Meeting>,
}

#[derive(Debug, Deserialize)]
struct Meeting {
    #[serde(rename = "ext_rencontreId", default)]
    ext_meeting_id: Value,
}

#[derive(Debug, Default, Deserialize)]
struct GymAttributes {
    #[serde(rename = "equipement", default)]
    equipment: Option<Equipment>,
}

#[derive(Debug, Default, Deserialize)]
struct Equipment {
    #[serde(rename = "libelle", default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(rename = "rue", default, deserialize_with = "lenient_string")]
    street: String,
    #[serde(rename = "codePostal", default, deserialize_with = "lenient_string")]
    zip: String,
    #[serde(rename = "ville", default, deserialize_with = "lenient_string")]
    city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    latitude: String,
    #[serde(default, deserialize_with = "lenient_string")]
    longitude: String,
}

#[derive(Debug, Default, Deserialize)]
struct ScoreAttributes {
    #[serde(default, deserialize_with = "lenient_string")]
    date: String,
    #[serde(rename = "title", default, deserialize_with = "lenient_string")]
    championship_day: String,
    #[serde(default)]
    home: TeamName,
    #[serde(default)]
    away: TeamName,
}

#[derive(Debug, Default, Deserialize)]
struct TeamName {
    #[serde(alias = "Name", default, deserialize_with = "lenient_string")]
    name: String,
}

/// Strings, numbers and nulls all end up as text; coordinates and ids come
/// in either form depending on the page.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(&Value::deserialize(deserializer)?))
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Ids of the matches listed on a team page, in page order.
pub fn parse_match_ids(html: &str, selectors: &Selectors) -> Vec<String> {
    let document = Html::parse_document(html);
    let attr = component_attributes(&document, &selectors.match_list);
    if attr.is_empty() {
        debug!("No match list found on page");
        return Vec::new();
    }

    match serde_json::from_str::<MatchList>(attr) {
        Ok(list) => list
            .meetings
            .iter()
            .map(|m| value_to_string(&m.ext_meeting_id))
            .filter(|id| !id.is_empty())
            .collect(),
        Err(e) => {
            debug!("Match list JSON parse error: {}", e);
            Vec::new()
        }
    }
}

/// Builds a match from a detail page. Blocks that are missing or malformed
/// are left empty.
pub fn parse_match_page(
    html: &str,
    url: &str,
    team: &TeamConfig,
    parsed_at: &str,
    selectors: &Selectors,
) -> Match {
    let document = Html::parse_document(html);

    let referees = parse_referees(component_attributes(&document, &selectors.referees));
    let gym = parse_gym(component_attributes(&document, &selectors.gym));
    let (teams, date, championship_day) =
        parse_teams_and_date(component_attributes(&document, &selectors.score));

    Match {
        url: url.to_string(),
        has_referees: referees.is_assigned(),
        gym,
        date,
        championship_day,
        parsed_at: parsed_at.to_string(),
        is_next: false,
        status: None,
        teams: Some(teams),
        referees: Some(referees),
        gender: team.gender.clone(),
        level: team.level.clone(),
    }
}

pub fn parse_gym(attr: &str) -> Option<Gym> {
    if attr.is_empty() {
        return None;
    }

    let parsed: GymAttributes = match serde_json::from_str(attr) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Gym JSON parse error: {}", e);
            return None;
        }
    };
    let equipment = parsed.equipment.unwrap_or_default();

    let has_coordinates = !equipment.latitude.is_empty() && !equipment.longitude.is_empty();
    let (maps_link, waze_link) = if has_coordinates {
        (
            Some(format!(
                "https://www.google.com/maps/search/?api=1&query={},{}",
                equipment.latitude, equipment.longitude
            )),
            Some(format!(
                "https://waze.com/ul?ll={},{}&navigate=yes",
                equipment.latitude, equipment.longitude
            )),
        )
    } else {
        (None, None)
    };

    Some(Gym {
        name: capitalize_words(&equipment.name),
        street: capitalize_words(&equipment.street),
        zip: equipment.zip,
        city: capitalize_words(&equipment.city),
        lat: equipment.latitude,
        lon: equipment.longitude,
        maps_link,
        waze_link,
    })
}

pub fn parse_referees(attr: &str) -> Referees {
    let mut referees = Referees::default();
    if attr.is_empty() || attr.contains(NO_REFEREES) {
        return referees;
    }

    match serde_json::from_str::<Vec<Option<String>>>(attr) {
        Ok(names) => {
            let mut names = names.into_iter().map(Option::unwrap_or_default);
            referees.ref1 = names.next().unwrap_or_default();
            referees.ref2 = names.next().unwrap_or_default();
        }
        Err(e) => debug!("Referees JSON parse error: {}", e),
    }

    referees
}

/// Teams, kickoff and championship day title from the score block.
pub fn parse_teams_and_date(attr: &str) -> (Teams, DateInfo, String) {
    if attr.is_empty() {
        return (Teams::default(), DateInfo::default(), String::new());
    }

    match serde_json::from_str::<ScoreAttributes>(attr) {
        Ok(score) => (
            Teams {
                home: capitalize_words(&score.home.name),
                away: capitalize_words(&score.away.name),
            },
            describe_date(&score.date),
            score.championship_day,
        ),
        Err(e) => {
            debug!("Score JSON parse error: {}", e);
            (Teams::default(), DateInfo::default(), String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> TeamConfig {
        TeamConfig::new(
            "ASC Rennais 1",
            "regional/masculine/",
            "equipe-1/",
            "poule-1/",
            "male",
            "regional_excellence",
        )
    }

    #[test]
    fn empty_gym_attribute_gives_no_gym() {
        assert_eq!(parse_gym(""), None);
        assert_eq!(parse_gym("not json"), None);
    }

    #[test]
    fn null_equipment_gives_an_empty_gym() {
        assert_eq!(parse_gym(r#"{"equipement":null}"#), Some(Gym::default()));
        assert_eq!(parse_gym("{}"), Some(Gym::default()));
    }

    #[test]
    fn gym_gets_links_only_with_coordinates() {
        let gym = parse_gym(
            r#"{"equipement":{"libelle":"SALLE DU BLOSNE","rue":"boulevard de yougoslavie","codePostal":"35200","ville":"RENNES","latitude":"48.08","longitude":"-1.66"}}"#,
        )
        .unwrap();

        assert_eq!(gym.name, "Salle Du Blosne");
        assert_eq!(gym.street, "Boulevard De Yougoslavie");
        assert_eq!(gym.city, "Rennes");
        assert_eq!(gym.zip, "35200");
        assert_eq!(
            gym.maps_link.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=48.08,-1.66")
        );
        assert_eq!(
            gym.waze_link.as_deref(),
            Some("https://waze.com/ul?ll=48.08,-1.66&navigate=yes")
        );

        let gym = parse_gym(r#"{"equipement":{"libelle":"gymnase","latitude":"48.08"}}"#).unwrap();
        assert_eq!(gym.name, "Gymnase");
        assert!(gym.maps_link.is_none());
        assert!(gym.waze_link.is_none());
    }

    #[test]
    fn numeric_coordinates_are_accepted() {
        let gym = parse_gym(r#"{"equipement":{"latitude":48.5,"longitude":-1.5}}"#).unwrap();
        assert_eq!(gym.lat, "48.5");
        assert_eq!(gym.lon, "-1.5");
        assert!(gym.maps_link.is_some());
    }

    #[test]
    fn null_pair_means_no_referees() {
        let referees = parse_referees("[null,null]");
        assert!(!referees.is_assigned());
        assert!(!parse_referees("").is_assigned());
        assert!(!parse_referees("{broken").is_assigned());
    }

    #[test]
    fn referees_take_the_first_two_names() {
        let referees = parse_referees(r#"["Alice Martin","Bruno Le Goff","Extra"]"#);
        assert_eq!(referees.ref1, "Alice Martin");
        assert_eq!(referees.ref2, "Bruno Le Goff");

        let single = parse_referees(r#"["Alice Martin", null]"#);
        assert_eq!(single.ref1, "Alice Martin");
        assert_eq!(single.ref2, "");
        assert!(single.is_assigned());
    }

    #[test]
    fn teams_and_date_from_score_block() {
        let (teams, date, day) = parse_teams_and_date(
            r#"{"date":"2025-10-04 16:00:00.000","title":"Journée 3","home":{"name":"ASC RENNAIS"},"away":{"name":"CESSON-SEVIGNE"}}"#,
        );
        assert_eq!(teams.home, "Asc Rennais");
        assert_eq!(teams.away, "Cesson-Sevigne");
        assert_eq!(date.raw, "2025-10-04 16:00:00.000");
        assert_eq!(date.day, "samedi");
        assert_eq!(date.time, "16H00");
        assert_eq!(day, "Journée 3");
    }

    #[test]
    fn broken_score_block_leaves_everything_empty() {
        let (teams, date, day) = parse_teams_and_date("<oops>");
        assert_eq!(teams, Teams::default());
        assert_eq!(date, DateInfo::default());
        assert!(day.is_empty());
    }

    #[test]
    fn match_ids_accept_strings_and_numbers() {
        let selectors = Selectors::new().unwrap();
        let html = r#"<html><body><smartfire-component name="competitions---rencontre-list" attributes='{"rencontres":[{"ext_rencontreId":"101"},{"ext_rencontreId":102},{"other":1}]}'></smartfire-component></body></html>"#;

        assert_eq!(parse_match_ids(html, &selectors), vec!["101", "102"]);
        assert!(parse_match_ids("<html></html>", &selectors).is_empty());
    }

    #[test]
    fn parses_a_full_match_page() {
        let selectors = Selectors::new().unwrap();
        let html = r#"<html><body>
            <smartfire-component name="competitions---rencontre-arbitres" attributes='["Alice Martin","Bruno Le Goff"]'></smartfire-component>
            <smartfire-component name="competitions---rencontre-salle" attributes='{"equipement":{"libelle":"SALLE COLETTE BESSON","ville":"RENNES"}}'></smartfire-component>
            <smartfire-component name="score" attributes='{"date":"2025-09-27 18:30:00.000","title":"Journée 1","home":{"name":"PACE"},"away":{"name":"ASC RENNAIS"}}'></smartfire-component>
        </body></html>"#;

        let m = parse_match_page(
            html,
            "https://example.org/rencontre-7/",
            &team(),
            "2025-09-20T10:00:00+02:00",
            &selectors,
        );

        assert_eq!(m.url, "https://example.org/rencontre-7/");
        assert!(m.has_referees);
        assert_eq!(m.gym.as_ref().unwrap().name, "Salle Colette Besson");
        assert_eq!(m.teams.as_ref().unwrap().home, "Pace");
        assert_eq!(m.date.time, "18H30");
        assert_eq!(m.championship_day, "Journée 1");
        assert_eq!(m.category_key(), "male|regional_excellence");
        assert!(!m.is_next);
    }

    #[test]
    fn page_without_components_gives_a_bare_match() {
        let selectors = Selectors::new().unwrap();
        let m = parse_match_page("<html></html>", "u", &team(), "now", &selectors);

        assert!(m.gym.is_none());
        assert!(!m.has_referees);
        assert!(m.date.raw.is_empty());
        assert_eq!(m.teams, Some(Teams::default()));
    }
}
