use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{Result, RiaError};
use crate::app::library::Library;
use crate::config::Config;
use crate::events::LikeEvents;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::gateway::ContentGateway;
use crate::store::sqlite::SqliteStore;

pub struct AppContext {
    pub store: Arc<SqliteStore>,
    pub gateway: ContentGateway,
    pub library: Library,
    pub config: Config,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>, config: Config) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        Self::with_store(store, config)
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        Self::with_store(store, config)
    }

    fn with_store(store: Arc<SqliteStore>, config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.network)?);
        let gateway = ContentGateway::new(fetcher, &config.network);
        let library = Library::new(store.clone(), LikeEvents::default());

        Ok(Self {
            store,
            gateway,
            library,
            config,
        })
    }

    pub fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| RiaError::Config("Could not find data directory".into()))?;
        let ria_dir = data_dir.join("ria");
        std::fs::create_dir_all(&ria_dir)?;
        Ok(ria_dir.join("ria.db"))
    }
}
