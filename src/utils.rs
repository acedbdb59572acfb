use crate::domain::DateInfo;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, ParseResult, Timelike};

/// Timestamp layout used by the federation pages, e.g. `2025-10-04 16:00:00.000`.
pub const MATCH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// French weekday names, Sunday first.
pub const DAYS: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];

pub const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const WORD_SEPARATORS: [char; 4] = [' ', '-', '’', '\''];

/// Upper-cases the first letter of every word and lower-cases the rest.
/// Separators are kept as they are.
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if WORD_SEPARATORS.contains(&c) {
            result.push(c);
            word_start = true;
        } else if word_start {
            result.extend(c.to_uppercase());
            word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

pub fn parse_match_time(raw: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, MATCH_TIME_FORMAT)
}

/// Builds the date block of a match. Only `raw` is filled when the value
/// does not parse.
pub fn describe_date(raw: &str) -> DateInfo {
    let mut date = DateInfo {
        raw: raw.to_string(),
        ..Default::default()
    };

    match parse_match_time(raw) {
        Ok(t) => {
            date.day = DAYS[t.weekday().num_days_from_sunday() as usize].to_string();
            date.day_num = format!("{:02}", t.day());
            date.month = MONTHS[t.month0() as usize].to_string();
            date.year = t.year().to_string();
            date.time = format!("{:02}H{:02}", t.hour(), t.minute());
        }
        Err(e) => tracing::debug!("Failed to parse date {:?}: {}", raw, e),
    }

    date
}

/// Saturday of the coming weekend; `today` itself when it is a Saturday.
pub fn next_weekend_date(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_sunday() as i64;
    let days_until_saturday = (6 - weekday + 7) % 7;
    today + Duration::days(days_until_saturday)
}

/// `dd/mm`, the way the weekend is announced to coaches.
pub fn format_weekend_date(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}
