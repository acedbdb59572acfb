use crate::config::ScraperConfig;
use crate::error::Result;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn load_scraper_config(&self, path: &Path) -> Result<ScraperConfig>;
    fn save_document(&self, path: &Path, document: &[u8]) -> Result<()>;
}
