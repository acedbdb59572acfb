use crate::error::Result;
use reqwest::Client;
use std::future::Future;
use tracing::info;

/// Anything able to hand back the HTML of a page.
pub trait PageSource: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct FfhbClient {
    client: Client,
}

impl FfhbClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for FfhbClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Visiting {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
