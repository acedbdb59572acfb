use crate::config::ScraperConfig;
use crate::domain::storage::Storage;
use crate::domain::Match;
use crate::error::Result;
use crate::infrastructure::PageSource;
use crate::services::grouping::{encode_matches, group_matches, next_matches};
use crate::services::scraping::ScrapingService;
use crate::services::weekend::weekend_matches;
use crate::utils::{format_weekend_date, next_weekend_date};
use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Runs one scrape and turns it into the JSON document the bot sends out.
pub struct MatchService<S> {
    config: ScraperConfig,
    scraping: ScrapingService<S>,
    store: Arc<dyn Storage>,
    output: Option<PathBuf>,
}

impl<S: PageSource> MatchService<S> {
    pub fn new(
        config: ScraperConfig,
        scraping: ScrapingService<S>,
        store: Arc<dyn Storage + 'static>,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            scraping,
            store,
            output,
        }
    }

    /// Every scraped match, or only the next one of each team when `next`
    /// is set.
    pub async fn matches(&self, next: bool) -> Result<Vec<u8>> {
        let mut matches = self.scrape().await?;
        if next {
            matches = next_matches(matches);
            info!("Kept {} next match(es)", matches.len());
        }
        encode_matches(&group_matches(matches, &self.config.teams))
    }

    pub async fn next_weekend(&self, today: NaiveDate) -> Result<Vec<u8>> {
        let saturday = next_weekend_date(today);
        info!(
            "Looking for matches on the weekend of {}",
            format_weekend_date(saturday)
        );

        let matches = weekend_matches(self.scrape().await?, saturday);
        info!("Found {} match(es) next weekend", matches.len());
        encode_matches(&group_matches(matches, &self.config.teams))
    }

    pub fn teams(&self) -> Result<Vec<u8>> {
        let mut encoded = serde_json::to_vec_pretty(&self.config.teams)?;
        encoded.push(b'\n');
        Ok(encoded)
    }

    /// Writes the document to the `--output` file, or to stdout.
    pub fn emit(&self, document: &[u8]) -> Result<()> {
        match &self.output {
            Some(path) => self.store.save_document(path, document),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(document)?;
                stdout.flush()?;
                Ok(())
            }
        }
    }

    async fn scrape(&self) -> Result<Vec<Match>> {
        info!("Scraping {} team(s)", self.config.teams.len());
        self.scraping.scrape_all(&self.config.teams).await
    }
}
