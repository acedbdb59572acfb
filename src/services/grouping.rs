use crate::domain::{GroupedMatches, Match, TeamConfig};
use crate::error::Result;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use tracing::debug;

const UNKNOWN_TEAM: &str = "unknown";

/// Keeps the earliest match of every `gender|level` category and flags it
/// with `is_next`. Matches without a valid date are never picked; on equal
/// dates the first one seen stays.
pub fn next_matches(matches: Vec<Match>) -> Vec<Match> {
    let mut next: BTreeMap<String, (NaiveDateTime, Match)> = BTreeMap::new();

    for mut m in matches {
        let Some(kickoff) = m.kickoff() else {
            debug!("Skipping {} for next match: no valid date", m.url);
            continue;
        };

        let key = m.category_key();
        let earlier = next
            .get(&key)
            .map_or(true, |(current, _)| kickoff < *current);
        if earlier {
            m.is_next = true;
            next.insert(key, (kickoff, m));
        }
    }

    next.into_values().map(|(_, m)| m).collect()
}

/// Groups matches by gender, then by the name of the configured team of
/// the same category, and sorts every group by date.
pub fn group_matches(matches: Vec<Match>, teams: &[TeamConfig]) -> GroupedMatches {
    let mut grouped = GroupedMatches::new();

    for m in matches {
        let key = m.category_key();
        let team_name = teams
            .iter()
            .find(|t| t.category_key() == key)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| UNKNOWN_TEAM.to_string());

        grouped
            .entry(m.gender.clone())
            .or_default()
            .entry(team_name)
            .or_default()
            .push(m);
    }

    for by_team in grouped.values_mut() {
        for team_matches in by_team.values_mut() {
            sort_matches_by_date(team_matches);
        }
    }

    grouped
}

/// Stable ascending sort. Matches whose date does not parse go after the
/// dated ones and keep their relative order.
pub fn sort_matches_by_date(matches: &mut [Match]) {
    matches.sort_by_key(|m| {
        let kickoff = m.kickoff();
        (kickoff.is_none(), kickoff)
    });
}

/// Pretty JSON with two-space indentation and a trailing newline.
pub fn encode_matches(grouped: &GroupedMatches) -> Result<Vec<u8>> {
    let mut encoded = serde_json::to_vec_pretty(grouped)?;
    encoded.push(b'\n');
    Ok(encoded)
}
