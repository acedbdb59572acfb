pub(crate) mod grouping;
pub(crate) mod match_service;
pub(crate) mod scraping;
pub(crate) mod weekend;

pub use match_service::MatchService;
pub use scraping::ScrapingService;
