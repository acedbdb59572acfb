use crate::domain::Match;
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Matches played on `saturday` or the Sunday after it.
pub fn weekend_matches(matches: Vec<Match>, saturday: NaiveDate) -> Vec<Match> {
    let sunday = saturday + Duration::days(1);

    matches
        .into_iter()
        .filter(|m| match m.kickoff() {
            Some(kickoff) => {
                let day = kickoff.date();
                day == saturday || day == sunday
            }
            None => {
                debug!("Ignoring {} for the weekend: no valid date", m.url);
                false
            }
        })
        .collect()
}
