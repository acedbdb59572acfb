use crate::config::ScraperConfig;
use crate::domain::storage::Storage;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Clone, Default)]
pub struct FileSystemStore;

impl FileSystemStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Storage for FileSystemStore {
    fn load_scraper_config(&self, path: &Path) -> Result<ScraperConfig> {
        info!("Loading scraper config from {:?}", path);
        self.read_json_file(path)
    }

    fn save_document(&self, path: &Path, document: &[u8]) -> Result<()> {
        self.ensure_parent(path)?;
        fs::write(path, document)?;
        info!("Saved matches to {:?}", path);
        Ok(())
    }
}
