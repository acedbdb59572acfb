use crate::config::ScraperConfig;
use crate::domain::{Match, TeamConfig};
use crate::error::Result;
use crate::infrastructure::scrapers::ffhb::{parse_match_ids, parse_match_page};
use crate::infrastructure::{PageSource, Selectors};
use chrono::{Local, SecondsFormat};
use futures::{stream, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Crawls the team pages. Every team gets its own task, and each task keeps
/// at most `concurrency` detail pages in flight. Parsed matches flow back
/// through one bounded channel.
pub struct ScrapingService<S> {
    source: Arc<S>,
    selectors: Arc<Selectors>,
    base_url: Arc<str>,
    concurrency: usize,
    channel_capacity: usize,
}

impl<S> Clone for ScrapingService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            selectors: Arc::clone(&self.selectors),
            base_url: Arc::clone(&self.base_url),
            concurrency: self.concurrency,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl<S: PageSource> ScrapingService<S> {
    pub fn new(source: S, config: &ScraperConfig) -> Result<Self> {
        info!("Created new Scraping service");
        Ok(Self {
            source: Arc::new(source),
            selectors: Arc::new(Selectors::new()?),
            base_url: Arc::from(config.base_url.as_str()),
            concurrency: config.concurrency.max(1),
            channel_capacity: config.channel_capacity.max(1),
        })
    }

    /// Scrapes every team and returns the matches in arrival order. Pages
    /// that fail are logged and skipped.
    pub async fn scrape_all(&self, teams: &[TeamConfig]) -> Result<Vec<Match>> {
        let (tx, mut rx) = mpsc::channel(self.channel_capacity);
        let mut workers = JoinSet::new();

        for team in teams.iter().cloned() {
            let worker = self.clone();
            let tx = tx.clone();
            workers.spawn(async move { worker.scrape_team(team, tx).await });
        }
        // The channel closes once the last worker drops its sender.
        drop(tx);

        let mut matches = Vec::new();
        while let Some(m) = rx.recv().await {
            matches.push(m);
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!("Scraping worker failed: {}", e);
            }
        }

        info!(
            "Collected {} match(es) from {} team(s)",
            matches.len(),
            teams.len()
        );
        Ok(matches)
    }

    async fn scrape_team(&self, team: TeamConfig, tx: mpsc::Sender<Match>) {
        let listing_url = team.listing_url(&self.base_url);
        let html = match self.source.fetch(&listing_url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Request error: {} {}", listing_url, e);
                return;
            }
        };

        let mut seen = HashSet::new();
        let urls: Vec<String> = parse_match_ids(&html, &self.selectors)
            .iter()
            .map(|id| team.match_url(&self.base_url, id))
            .filter(|url| seen.insert(url.clone()))
            .collect();

        for url in &urls {
            debug!("Queueing match URL: {}", url);
        }

        let team = Arc::new(team);
        stream::iter(urls)
            .for_each_concurrent(self.concurrency, |url| {
                let worker = self.clone();
                let team = Arc::clone(&team);
                let tx = tx.clone();
                async move { worker.scrape_match(&url, &team, &tx).await }
            })
            .await;
    }

    async fn scrape_match(&self, url: &str, team: &TeamConfig, tx: &mpsc::Sender<Match>) {
        let html = match self.source.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Request error: {} {}", url, e);
                return;
            }
        };

        let parsed_at = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let m = parse_match_page(&html, url, team, &parsed_at, &self.selectors);

        if tx.send(m).await.is_err() {
            warn!("Match collector is gone, dropping {}", url);
        }
    }
}
