mod matches;
pub(crate) mod storage;
mod team;

pub use matches::{DateInfo, GroupedMatches, Gym, Match, Referees, Teams};
pub use team::TeamConfig;
