mod clients;
pub(crate) mod scrapers;
mod storage;

pub use clients::ffhb::{FfhbClient, PageSource};
pub use scrapers::Selectors;
pub use storage::fs_store::FileSystemStore;
